//! telemetry/counters.rs
//! Mutable counters filled during a decode pass.
//!
//! Summary: counts frames and bytes as decode events arrive.
//! Converted into an immutable `TelemetrySnapshot` when the pass ends.
use std::ops::AddAssign;
use serde::Serialize;

use crate::compression::PayloadCodec;
use crate::events::{DecodeEvent, DecodeObserver};

/// Deterministic counters collected while decoding
#[derive(Default, Clone, Debug, PartialEq, Serialize)]
pub struct TelemetryCounters {
    pub containers: u64,
    pub frames_declared: u64,
    pub frames_decoded: u64,
    pub frames_empty: u64,
    pub early_stops: u64,
    /// Preamble bytes.
    pub bytes_overhead: u64,
    /// Bytes after the preamble as stored in the file.
    pub bytes_stored: u64,
    /// Frame stream bytes after decompression.
    pub bytes_payload: u64,
    /// Pixel bytes handed out in frames.
    pub bytes_pixels: u64,
    pub gzip_payloads: u64,
}

impl TelemetryCounters {
    /// Record the parsed preamble.
    pub fn add_header(&mut self, frame_count: u32, header_len: usize) {
        self.containers += 1;
        self.frames_declared += frame_count as u64;
        self.bytes_overhead += header_len as u64;
    }

    /// Record the stored and decoded payload sizes.
    pub fn add_payload(&mut self, codec: PayloadCodec, stored_len: usize, payload_len: usize) {
        if codec == PayloadCodec::Gzip {
            self.gzip_payloads += 1;
        }
        self.bytes_stored += stored_len as u64;
        self.bytes_payload += payload_len as u64;
    }

    /// Record one decoded frame.
    pub fn add_frame(&mut self, width: u32, height: u32) {
        self.frames_decoded += 1;
        let px = width as u64 * height as u64 * 4;
        if px == 0 {
            self.frames_empty += 1;
        }
        self.bytes_pixels += px;
    }

    /// Total input size (preamble + stored body).
    pub fn bytes_input(&self) -> u64 {
        self.bytes_overhead + self.bytes_stored
    }

    /// Declared frames that were never decoded.
    pub fn frames_missing(&self) -> u64 {
        self.frames_declared.saturating_sub(self.frames_decoded)
    }

    // Per-file counters are merged after the fact rather than shared:
    // no locks, no atomics.
    pub fn merge(&mut self, other: &TelemetryCounters) {
        *self += other.clone();
    }
}

impl DecodeObserver for TelemetryCounters {
    fn on_event(&mut self, event: &DecodeEvent<'_>) {
        match *event {
            DecodeEvent::HeaderParsed { header, body_offset } =>
                self.add_header(header.frame_count, body_offset),
            DecodeEvent::PayloadReady { codec, stored_len, payload_len } =>
                self.add_payload(codec, stored_len, payload_len),
            DecodeEvent::FrameDecoded { width, height, .. } =>
                self.add_frame(width, height),
            DecodeEvent::EarlyStop(_) =>
                self.early_stops += 1,
            DecodeEvent::Finished { .. } => {}
        }
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.containers      += rhs.containers;
        self.frames_declared += rhs.frames_declared;
        self.frames_decoded  += rhs.frames_decoded;
        self.frames_empty    += rhs.frames_empty;
        self.early_stops     += rhs.early_stops;

        self.bytes_overhead  += rhs.bytes_overhead;
        self.bytes_stored    += rhs.bytes_stored;
        self.bytes_payload   += rhs.bytes_payload;
        self.bytes_pixels    += rhs.bytes_pixels;
        self.gzip_payloads   += rhs.gzip_payloads;
    }
}
