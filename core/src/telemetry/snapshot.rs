//! telemetry/snapshot.rs
//!
//! Immutable telemetry snapshot.
//!
//! Design notes:
//! - Built once from counters + timer at the end of a decode.
//! - Serializable so the frame sink can embed it in its manifest.

use std::time::Duration;
use serde::Serialize;

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetrySnapshot {
    pub counters: TelemetryCounters,
    /// Share of the payload saved by compression: `1 - stored / payload`.
    /// Zero for uncompressed or empty payloads.
    pub compression_ratio: f64,
    pub throughput_payload_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let compression_ratio = if counters.gzip_payloads > 0 && counters.bytes_payload > 0 {
            1.0 - counters.bytes_stored as f64 / counters.bytes_payload as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_payload as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            counters: counters.clone(),
            compression_ratio,
            throughput_payload_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times,
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        self.stage_times.has_all(expected)
    }

    /// Internal invariants:
    /// - decoded frames never exceed declared ones
    /// - pixel bytes fit inside the payload
    pub fn sanity_check(&self) -> bool {
        let c = &self.counters;
        c.frames_decoded <= c.frames_declared && c.bytes_pixels <= c.bytes_payload
    }

    /// Whether some declared frames were not decoded.
    pub fn is_partial(&self) -> bool {
        self.counters.frames_missing() > 0
    }
}
