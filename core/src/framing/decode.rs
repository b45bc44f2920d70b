//! framing/decode.rs
//! Lazy frame record reader over a (decompressed) payload.

use crate::constants::FRAME_RECORD_HEADER_LEN;
use crate::cursor::ByteCursor;
use crate::framing::types::{DecodedSet, EarlyStop, FrameView};
use crate::utils::rgba_len;

/// Lazily reads frame records from a (decompressed) payload.
///
/// Yields at most `expected` frames. Running out of bytes ends iteration and
/// records an `EarlyStop`; it never yields an error.
#[derive(Debug, Clone)]
pub struct FrameReader<'a> {
    cursor: ByteCursor<'a>,
    expected: u32,
    next_index: u32,
    early_stop: Option<EarlyStop>,
    done: bool,
}

impl<'a> FrameReader<'a> {
    pub fn new(payload: &'a [u8], expected: u32) -> Self {
        Self {
            cursor: ByteCursor::new(payload),
            expected,
            next_index: 0,
            early_stop: None,
            done: expected == 0,
        }
    }

    /// Frames yielded so far.
    #[inline]
    pub fn decoded(&self) -> u32 {
        self.next_index
    }

    #[inline]
    pub fn expected(&self) -> u32 {
        self.expected
    }

    /// Set once iteration has stopped short of `expected`.
    #[inline]
    pub fn early_stop(&self) -> Option<&EarlyStop> {
        self.early_stop.as_ref()
    }

    /// Unread payload bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    fn read_record(&mut self) -> Result<FrameView<'a>, EarlyStop> {
        let index = self.next_index;
        let available = self.cursor.remaining();
        if available < FRAME_RECORD_HEADER_LEN {
            return Err(EarlyStop::RecordHeader { index, available });
        }

        let header_err = |_| EarlyStop::RecordHeader { index, available };
        let timestamp_ms = self.cursor.read_i64_le().map_err(header_err)?;
        let width = self.cursor.read_u32_le().map_err(header_err)?;
        let height = self.cursor.read_u32_le().map_err(header_err)?;

        let pixel_len = rgba_len(width, height)
            .ok_or(EarlyStop::PixelSizeOverflow { index, width, height })?;

        let available = self.cursor.remaining();
        let pixels = self.cursor.take(pixel_len).map_err(|_| EarlyStop::PixelData {
            index,
            width,
            height,
            needed: pixel_len,
            available,
        })?;

        Ok(FrameView { index, timestamp_ms, width, height, pixels })
    }
}

impl<'a> Iterator for FrameReader<'a> {
    type Item = FrameView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_record() {
            Ok(frame) => {
                self.next_index += 1;
                if self.next_index >= self.expected {
                    self.done = true;
                }
                Some(frame)
            }
            Err(stop) => {
                self.early_stop = Some(stop);
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, Some((self.expected - self.next_index) as usize))
        }
    }
}

/// Read up to `expected` frame records from `payload`.
///
/// A short payload is not an error: the frames read before it ran out are
/// returned, and `early_stop` says where and why.
pub fn parse_frames(payload: &[u8], expected: u32) -> DecodedSet<'_> {
    let mut reader = FrameReader::new(payload, expected);
    let frames: Vec<FrameView<'_>> = reader.by_ref().collect();

    DecodedSet {
        frames,
        declared: expected,
        early_stop: reader.early_stop,
        trailing_bytes: reader.cursor.remaining(),
    }
}
