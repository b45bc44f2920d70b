//! compression/types.rs
//! Payload codec identifiers and the decompressor trait.
use std::fmt;
use serde::Serialize;

use crate::headers::ContainerHeader;
use crate::types::Result;

/// How the bytes after the preamble are stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadCodec {
    /// Frame records follow the preamble directly.
    Raw,
    /// One gzip stream wrapping all frame records.
    Gzip,
}

impl PayloadCodec {
    #[inline]
    pub fn from_header(header: &ContainerHeader) -> Self {
        if header.compressed {
            PayloadCodec::Gzip
        } else {
            PayloadCodec::Raw
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            PayloadCodec::Raw  => "raw",
            PayloadCodec::Gzip => "gzip",
        }
    }
}

impl fmt::Display for PayloadCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Require Send so a boxed decompressor can move to another thread with its container.
pub trait Decompressor: Send {
    /// Decompress the whole input into `out`.
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<()>;
}
