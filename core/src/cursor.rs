//! cursor.rs
//! Sequential little-endian reader over an immutable byte buffer.
//!
//! Design notes:
//! - Single read path for the container header and the frame records, so
//!   endianness is handled in exactly one place.
//! - A failed read leaves the position untouched.

use byteorder::{ByteOrder, LittleEndian};

use crate::types::{DecodeError, Result};

#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Start reading at `pos` (clamped to the buffer length).
    #[inline]
    pub fn at(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos: pos.min(buf.len()) }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Move to an absolute offset. Seeking past the end is a truncation.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.buf.len() {
            return Err(DecodeError::truncated(pos, self.buf.len()));
        }
        self.pos = pos;
        Ok(())
    }

    /// Borrow the next `n` bytes and advance past them.
    #[inline]
    pub fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if n > available {
            return Err(DecodeError::truncated(n, available));
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    #[inline]
    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.take(4).map(LittleEndian::read_u32)
    }

    #[inline]
    pub fn read_i64_le(&mut self) -> Result<i64> {
        self.take(8).map(LittleEndian::read_i64)
    }

    /// Everything from the current position to the end, without advancing.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }
}
