//! config.rs
//! Caller-tunable decode behavior.

use serde::{Deserialize, Serialize};

/// Options for container decoding. The defaults are lenient: only the
/// preamble and payload can fail a decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecodeOptions {
    /// Treat the header's `max_width` / `max_height` as binding and fail with
    /// `ExceedsBounds` on a larger frame. Off by default: the bounds are
    /// descriptive metadata.
    pub enforce_bounds: bool,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self { enforce_bounds: true }
    }
}
