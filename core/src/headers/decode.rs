//! headers/decode.rs
//!
//! Header decoding.
//!
//! Design notes:
//! - The tag is checked as soon as four bytes exist, so a foreign file is
//!   reported as `BadMagic` whatever its length.
//! - Any version value is accepted; the only branch is `version >= 2`.
//! - Field reads go through `ByteCursor` like the frame parser does.

use crate::constants::{MAGIC_RGBA, MIN_HEADER_LEN, VERSION_WITH_COMPRESSION};
use crate::cursor::ByteCursor;
use crate::headers::types::ContainerHeader;
use crate::types::{DecodeError, Result};

/// Parse the container preamble.
///
/// # Returns
/// - `Ok((header, body_offset))` where `body_offset` is the first byte of the
///   frame stream (or of the gzip blob when compressed).
/// - `Err(BadMagic)` if the first four bytes are not `RGBA`.
/// - `Err(TruncatedInput)` if the buffer is shorter than 19 bytes.
pub fn parse_header(buf: &[u8]) -> Result<(ContainerHeader, usize)> {
    let mut cur = ByteCursor::new(buf);

    let magic = cur.take(MAGIC_RGBA.len())?;
    if magic != MAGIC_RGBA {
        let mut found = [0u8; 4];
        found.copy_from_slice(magic);
        return Err(DecodeError::BadMagic { found });
    }

    if buf.len() < MIN_HEADER_LEN {
        return Err(DecodeError::truncated(MIN_HEADER_LEN, buf.len()));
    }

    let version = cur.read_u8()?;                          // 4
    let header_size = ContainerHeader::header_size_for(version);
    let compressed = if version >= VERSION_WITH_COMPRESSION {
        cur.read_u8()? != 0                                // 5 (version >= 2)
    } else {
        false
    };

    debug_assert_eq!(cur.position(), header_size as usize);
    let frame_count = cur.read_u32_le()?;                  // header_size..+4
    let max_width = cur.read_u32_le()?;                    // +4..+8
    let max_height = cur.read_u32_le()?;                   // +8..+12
    let grayscale = cur.read_u8()? != 0;                   // +12

    let header = ContainerHeader {
        version,
        compressed,
        frame_count,
        max_width,
        max_height,
        grayscale,
        header_size,
    };

    // body offset is always header_size + 13
    let body_offset = cur.position();
    debug_assert_eq!(body_offset, header.preamble_len());

    Ok((header, body_offset))
}

/// Parse the preamble and return only the header.
#[inline]
pub fn decode_header(buf: &[u8]) -> Result<ContainerHeader> {
    parse_header(buf).map(|(h, _)| h)
}
