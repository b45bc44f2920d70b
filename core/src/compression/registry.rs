//! compression/registry.rs
//! Codec resolution and the whole-payload decompress step.

use std::borrow::Cow;

use crate::compression::codecs::GzipDecompressor;
use crate::compression::types::{Decompressor, PayloadCodec};
use crate::types::Result;

/// Decompressor for a codec, or `None` when the payload is stored as is.
pub fn create_decompressor(codec: PayloadCodec) -> Option<Box<dyn Decompressor + Send>> {
    match codec {
        PayloadCodec::Raw  => None,
        PayloadCodec::Gzip => Some(GzipDecompressor::new()),
    }
}

/// Turn the bytes after the preamble into the frame stream.
///
/// - `Raw` borrows `body` unchanged.
/// - `Gzip` materializes the full decompressed payload before any frame is parsed.
pub fn decompress_payload(codec: PayloadCodec, body: &[u8]) -> Result<Cow<'_, [u8]>> {
    match create_decompressor(codec) {
        None => Ok(Cow::Borrowed(body)),
        Some(mut dec) => {
            let mut out = Vec::new();
            dec.decompress(body, &mut out)?;
            Ok(Cow::Owned(out))
        }
    }
}
