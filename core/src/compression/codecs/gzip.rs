//! Gzip via flate2, whole buffer at a time.

use std::io::Read;
use flate2::read::MultiGzDecoder;

use crate::compression::types::Decompressor;
use crate::types::{DecodeError, Result};

pub struct GzipDecompressor;

impl GzipDecompressor {
    pub fn new() -> Box<dyn Decompressor + Send> {
        Box::new(Self)
    }
}

impl Decompressor for GzipDecompressor {
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<()> {
        // empty body -> empty payload
        if input.is_empty() {
            return Ok(());
        }

        // Multi-member aware: concatenated gzip members decode back to back.
        let mut dec = MultiGzDecoder::new(input);
        dec.read_to_end(out)
            .map_err(|source| DecodeError::DecompressionFailed { source })?;

        Ok(())
    }
}
