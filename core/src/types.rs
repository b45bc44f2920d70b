use std::io;
use thiserror::Error;

use crate::constants::MAGIC_RGBA;
use crate::utils::fmt_bytes;

/// Result alias used across the decoder.
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;

/// Unified decode error.
/// - Every variant is fatal to the call that produced it.
/// - Per-frame truncation in a container is *not* an error; see `framing::EarlyStop`.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// First four bytes are not the `RGBA` tag.
    #[error("bad magic: expected {}, found {}", fmt_bytes(&MAGIC_RGBA), fmt_bytes(.found))]
    BadMagic { found: [u8; 4] },

    /// Reserved for stricter version policies; the default decoder accepts any version.
    #[error("unsupported container version: {0}")]
    UnsupportedVersion(u8),

    /// Fewer bytes than a read or a layout requires.
    #[error("truncated input: needed {needed} bytes, {available} available")]
    TruncatedInput { needed: usize, available: usize },

    /// The gzip payload is malformed (header, footer, truncation, checksum).
    #[error("gzip decompression failed: {source}")]
    DecompressionFailed {
        #[source]
        source: io::Error,
    },

    /// `width * height * 4` does not fit the platform's size type.
    #[error("pixel size overflow for {width}x{height} RGBA")]
    Overflow { width: u32, height: u32 },

    /// Frame larger than the header's declared bounds (only with `enforce_bounds`).
    #[error("frame {index} is {width}x{height}, exceeds declared bounds {max_width}x{max_height}")]
    ExceedsBounds {
        index: u32,
        width: u32,
        height: u32,
        max_width: u32,
        max_height: u32,
    },
}

impl DecodeError {
    pub(crate) fn truncated(needed: usize, available: usize) -> Self {
        DecodeError::TruncatedInput { needed, available }
    }
}
