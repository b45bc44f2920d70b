//! single.rs
//! Headerless single-image buffers with out-of-band dimensions.
//!
//! Unlike the container stream there is no partial result here: a buffer that
//! is too short for `width x height` is fatal. Extra trailing bytes are
//! ignored.

use crate::types::{DecodeError, Result};
use crate::utils::rgba_len;

/// Validate `buf` against `width x height` and return exactly the image bytes.
pub fn parse_single_frame(buf: &[u8], width: u32, height: u32) -> Result<&[u8]> {
    SingleFrame::parse(buf, width, height).map(|f| f.pixels)
}

/// A validated single image plus what was cut off the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleFrame<'a> {
    pub width: u32,
    pub height: u32,
    pub pixels: &'a [u8],
    /// Bytes past `width * height * 4` that were ignored.
    pub trailing_bytes: usize,
}

impl<'a> SingleFrame<'a> {
    pub fn parse(buf: &'a [u8], width: u32, height: u32) -> Result<Self> {
        let expected = rgba_len(width, height).ok_or(DecodeError::Overflow { width, height })?;

        if buf.len() < expected {
            return Err(DecodeError::TruncatedInput { needed: expected, available: buf.len() });
        }

        Ok(Self {
            width,
            height,
            pixels: &buf[..expected],
            trailing_bytes: buf.len() - expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_buffer() {
        let buf = vec![7u8; 2 * 3 * 4];
        let f = SingleFrame::parse(&buf, 2, 3).unwrap();
        assert_eq!(f.pixels.len(), 24);
        assert_eq!(f.trailing_bytes, 0);
    }

    #[test]
    fn overflow_is_reported() {
        assert!(matches!(
            parse_single_frame(&[], u32::MAX, u32::MAX),
            Err(DecodeError::Overflow { .. })
        ));
    }
}
