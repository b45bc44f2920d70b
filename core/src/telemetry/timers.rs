//! telemetry/timers.rs
//! Wall-clock time per decode stage.
//!
//! Stages are a closed set, so times live in a fixed array indexed by
//! `Stage`; an unrecorded stage is `None`, not zero.

use std::fmt;
use std::time::{Duration, Instant};

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Read,
    Header,
    Decompress,
    Frames,
    Write,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Read,
        Stage::Header,
        Stage::Decompress,
        Stage::Frames,
        Stage::Write,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Stage::Read       => "read",
            Stage::Header     => "header",
            Stage::Decompress => "decompress",
            Stage::Frames     => "frames",
            Stage::Write      => "write",
        }
    }

    #[inline]
    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageTimes {
    slots: [Option<Duration>; Stage::ALL.len()],
}

impl StageTimes {
    /// Charge `dur` to `stage`, accumulating across calls.
    pub fn add(&mut self, stage: Stage, dur: Duration) {
        let slot = &mut self.slots[stage.slot()];
        *slot = Some(slot.unwrap_or_default() + dur);
    }

    /// Time charged to `stage`; zero if it never ran.
    pub fn get(&self, stage: Stage) -> Duration {
        self.slots[stage.slot()].unwrap_or_default()
    }

    pub fn get_ms(&self, stage: Stage) -> f64 {
        self.get(stage).as_secs_f64() * 1_000.0
    }

    pub fn recorded(&self, stage: Stage) -> bool {
        self.slots[stage.slot()].is_some()
    }

    pub fn total(&self) -> Duration {
        self.iter().map(|(_, d)| d).sum()
    }

    /// Whether every stage in `expected` was recorded at least once.
    pub fn has_all(&self, expected: &[Stage]) -> bool {
        expected.iter().all(|&s| self.recorded(s))
    }

    /// Recorded stages in pipeline order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, Duration)> + '_ {
        Stage::ALL
            .into_iter()
            .filter_map(move |s| self.slots[s.slot()].map(|d| (s, d)))
    }

    pub fn merge(&mut self, other: &StageTimes) {
        for (stage, dur) in other.iter() {
            self.add(stage, dur);
        }
    }
}

/// Serialized as `{ "read": 0.12, ... }` in milliseconds, recorded stages only.
impl Serialize for StageTimes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (stage, dur) in self.iter() {
            map.serialize_entry(stage.name(), &(dur.as_secs_f64() * 1_000.0))?;
        }
        map.end()
    }
}

/// Stage stopwatch for one decode pass.
#[derive(Clone, Debug)]
pub struct TelemetryTimer {
    started: Instant,
    finished: Option<Instant>,
    pub stage_times: StageTimes,
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryTimer {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            finished: None,
            stage_times: StageTimes::default(),
        }
    }

    /// Freeze `elapsed`. Later calls keep the first end time.
    pub fn finish(&mut self) {
        self.finished.get_or_insert_with(Instant::now);
    }

    pub fn add_stage_time(&mut self, stage: Stage, dur: Duration) {
        self.stage_times.add(stage, dur);
    }

    /// Run `f`, charging its wall time to `stage`.
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let t = Instant::now();
        let out = f();
        self.add_stage_time(stage, t.elapsed());
        out
    }

    /// Since `new`, up to `finish` if it was called.
    pub fn elapsed(&self) -> Duration {
        self.finished.unwrap_or_else(Instant::now).duration_since(self.started)
    }
}
