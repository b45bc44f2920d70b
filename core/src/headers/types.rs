//! headers/types.rs
//! Container preamble struct.
//!
//! Notes:
//! - Little-endian for every multi-byte field.
//! - Layout depends on the version byte: version >= 2 inserts a one-byte
//!   compression flag before the counts, so the header is 5 or 6 bytes of
//!   fixed fields followed by 12 bytes of counts and a grayscale byte.
//! - `max_width`, `max_height` and `grayscale` are descriptive; frames are
//!   not validated against them unless the caller asks for it.

use std::fmt;
use serde::Serialize;

use crate::constants::{HEADER_COUNTS_LEN, HEADER_SIZE_V1, HEADER_SIZE_V2, VERSION_WITH_COMPRESSION};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContainerHeader {
    pub version: u8,
    pub compressed: bool,  // always false for version < 2
    pub frame_count: u32,  // declared, not guaranteed
    pub max_width: u32,
    pub max_height: u32,
    pub grayscale: bool,
    pub header_size: u8,   // 5 or 6, where the counts start
}

impl ContainerHeader {
    /// Size of the fixed fields preceding the counts for a given version.
    #[inline]
    pub const fn header_size_for(version: u8) -> u8 {
        if version >= VERSION_WITH_COMPRESSION {
            HEADER_SIZE_V2
        } else {
            HEADER_SIZE_V1
        }
    }

    /// Whether this version carries the compression flag byte.
    #[inline]
    pub const fn has_compression_flag(&self) -> bool {
        self.version >= VERSION_WITH_COMPRESSION
    }

    /// Full preamble length through the grayscale byte; equals the body offset.
    #[inline]
    pub const fn preamble_len(&self) -> usize {
        self.header_size as usize + HEADER_COUNTS_LEN + 1
    }

    /// Whether a frame of `width x height` lies within the declared bounds.
    #[inline]
    pub const fn within_bounds(&self, width: u32, height: u32) -> bool {
        width <= self.max_width && height <= self.max_height
    }

    /// One-line description for logs.
    pub fn summary(&self) -> String {
        format!(
            "v{} frames={} max={}x{} compression={} grayscale={}",
            self.version,
            self.frame_count,
            self.max_width,
            self.max_height,
            if self.compressed { "gzip" } else { "none" },
            self.grayscale,
        )
    }
}

impl fmt::Display for ContainerHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
