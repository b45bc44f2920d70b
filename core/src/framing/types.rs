//! framing/types.rs
//! Frame views, owned frames and early-stop reasons.

use std::fmt;
use serde::Serialize;

use crate::constants::FRAME_RECORD_HEADER_LEN;

/// One decoded frame record, borrowed from the payload.
///
/// Invariant: `pixels.len() == width * height * 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameView<'a> {
    /// 0-based position in the stream.
    pub index: u32,
    pub timestamp_ms: i64,
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA, 4 bytes per pixel.
    pub pixels: &'a [u8],
}

impl<'a> FrameView<'a> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Copy the pixels out so the frame can outlive the decode pass.
    pub fn to_owned_frame(&self) -> OwnedFrame {
        OwnedFrame {
            index: self.index,
            timestamp_ms: self.timestamp_ms,
            width: self.width,
            height: self.height,
            pixels: self.pixels.to_vec(),
        }
    }
}

/// A frame that owns its pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedFrame {
    pub index: u32,
    pub timestamp_ms: i64,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl OwnedFrame {
    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            index: self.index,
            timestamp_ms: self.timestamp_ms,
            width: self.width,
            height: self.height,
            pixels: &self.pixels,
        }
    }
}

/// Why frame iteration ended before the declared frame count.
///
/// None of these are errors: frames read before the stop are still returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EarlyStop {
    /// Fewer than 16 bytes left for the next record header.
    RecordHeader { index: u32, available: usize },
    /// Record header read, but its pixel data is cut short.
    PixelData {
        index: u32,
        width: u32,
        height: u32,
        needed: usize,
        available: usize,
    },
    /// `width * height * 4` is not representable; no payload could hold it.
    PixelSizeOverflow { index: u32, width: u32, height: u32 },
}

impl EarlyStop {
    /// Index of the frame that could not be read.
    pub fn index(&self) -> u32 {
        match *self {
            EarlyStop::RecordHeader { index, .. }
            | EarlyStop::PixelData { index, .. }
            | EarlyStop::PixelSizeOverflow { index, .. } => index,
        }
    }
}

impl fmt::Display for EarlyStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EarlyStop::*;
        match self {
            RecordHeader { index, available } =>
                write!(f, "frame {}: record header needs {} bytes, {} available",
                       index, FRAME_RECORD_HEADER_LEN, available),
            PixelData { index, width, height, needed, available } =>
                write!(f, "frame {}: {}x{} pixels need {} bytes, {} available",
                       index, width, height, needed, available),
            PixelSizeOverflow { index, width, height } =>
                write!(f, "frame {}: pixel size of {}x{} overflows", index, width, height),
        }
    }
}

/// Frames in stream order plus the reason iteration stopped early, if it did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSet<'a> {
    pub frames: Vec<FrameView<'a>>,
    /// `frame_count` the caller asked for.
    pub declared: u32,
    pub early_stop: Option<EarlyStop>,
    /// Bytes left in the payload after the last frame read.
    pub trailing_bytes: usize,
}

impl<'a> DecodedSet<'a> {
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// All declared frames were read.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.early_stop.is_none()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrameView<'a>> {
        self.frames.iter()
    }
}

impl<'a> IntoIterator for DecodedSet<'a> {
    type Item = FrameView<'a>;
    type IntoIter = std::vec::IntoIter<FrameView<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}
