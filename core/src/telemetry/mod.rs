//! telemetry/mod.rs
//! Counters, stage timers and immutable snapshots for decode passes.
//!
//! Notes:
//! - Counters are fed by decode events (`TelemetryCounters` is a `DecodeObserver`).
//! - Timers are driven by the caller, which knows where I/O happens.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
