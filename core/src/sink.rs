//! sink.rs
//! Frame sink collaborator interface.
//!
//! A sink receives `(index, timestamp_ms, width, height, pixels)` for each
//! decoded frame, in stream order, and persists it however it likes. Pixel
//! slices borrow the decode buffer; sinks copy what they keep.

use std::convert::Infallible;
use serde::Serialize;

use crate::framing::{EarlyStop, FrameView, OwnedFrame};

/// Outcome of streaming a container into a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecodeSummary {
    pub decoded: u32,
    pub declared: u32,
    pub early_stop: Option<EarlyStop>,
    pub trailing_bytes: usize,
}

impl DecodeSummary {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.early_stop.is_none()
    }
}

pub trait FrameSink {
    type Error: std::error::Error + 'static;

    fn write_frame(&mut self, frame: &FrameView<'_>) -> Result<(), Self::Error>;

    /// Called once after the last frame, including after an early stop.
    fn finish(&mut self, _summary: &DecodeSummary) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Collects owned copies of every frame.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub frames: Vec<OwnedFrame>,
    pub summary: Option<DecodeSummary>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameSink for MemorySink {
    type Error = Infallible;

    fn write_frame(&mut self, frame: &FrameView<'_>) -> Result<(), Self::Error> {
        self.frames.push(frame.to_owned_frame());
        Ok(())
    }

    fn finish(&mut self, summary: &DecodeSummary) -> Result<(), Self::Error> {
        self.summary = Some(*summary);
        Ok(())
    }
}
