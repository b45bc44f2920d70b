//! events.rs
//! Decode events and observers.
//!
//! The decoder never prints. Anything that wants to narrate progress, count
//! bytes or time stages implements `DecodeObserver` and is handed to the
//! decoder; events arrive in stream order.

use tracing::{debug, info, warn};

use crate::compression::PayloadCodec;
use crate::constants::DEFAULT_PROGRESS_EVERY;
use crate::framing::EarlyStop;
use crate::headers::ContainerHeader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeEvent<'a> {
    /// Preamble parsed and validated.
    HeaderParsed { header: &'a ContainerHeader, body_offset: usize },
    /// Frame stream materialized (decompressed or borrowed).
    PayloadReady { codec: PayloadCodec, stored_len: usize, payload_len: usize },
    /// One frame record decoded and handed on.
    FrameDecoded {
        index: u32,
        timestamp_ms: i64,
        width: u32,
        height: u32,
        declared: u32,
    },
    /// Iteration stopped short of the declared count.
    EarlyStop(&'a EarlyStop),
    /// Decode pass complete.
    Finished { decoded: u32, declared: u32 },
}

pub trait DecodeObserver {
    fn on_event(&mut self, event: &DecodeEvent<'_>);
}

/// No-op observer.
impl DecodeObserver for () {
    fn on_event(&mut self, _event: &DecodeEvent<'_>) {}
}

impl<F> DecodeObserver for F
where
    F: FnMut(&DecodeEvent<'_>),
{
    fn on_event(&mut self, event: &DecodeEvent<'_>) {
        self(event)
    }
}

/// Fan out to two observers, left first.
impl<A: DecodeObserver, B: DecodeObserver> DecodeObserver for (A, B) {
    fn on_event(&mut self, event: &DecodeEvent<'_>) {
        self.0.on_event(event);
        self.1.on_event(event);
    }
}

/// Narrates a decode through `tracing`.
///
/// Progress is logged every `progress_every` frames and on the last declared
/// frame. Early stops are warnings.
#[derive(Debug, Clone)]
pub struct LogObserver {
    progress_every: u32,
}

impl Default for LogObserver {
    fn default() -> Self {
        Self { progress_every: DEFAULT_PROGRESS_EVERY }
    }
}

impl LogObserver {
    pub fn new(progress_every: u32) -> Self {
        Self { progress_every: progress_every.max(1) }
    }

    /// Whether frame `index` (0-based) should produce a progress line.
    pub fn is_progress_tick(&self, index: u32, declared: u32) -> bool {
        let n = index + 1;
        n % self.progress_every == 0 || n == declared
    }
}

impl DecodeObserver for LogObserver {
    fn on_event(&mut self, event: &DecodeEvent<'_>) {
        match *event {
            DecodeEvent::HeaderParsed { header, body_offset } => {
                info!(
                    version = header.version,
                    frames = header.frame_count,
                    max_width = header.max_width,
                    max_height = header.max_height,
                    compressed = header.compressed,
                    grayscale = header.grayscale,
                    body_offset,
                    "container header parsed"
                );
                if !header.has_compression_flag() {
                    debug!(version = header.version, "legacy header without compression flag");
                }
            }
            DecodeEvent::PayloadReady { codec: PayloadCodec::Gzip, stored_len, payload_len } => {
                let saved = if payload_len > 0 {
                    (1.0 - stored_len as f64 / payload_len as f64) * 100.0
                } else {
                    0.0
                };
                info!(stored_len, payload_len, "payload decompressed ({:.1}% saved)", saved);
            }
            DecodeEvent::PayloadReady { codec, payload_len, .. } => {
                debug!(%codec, payload_len, "payload ready");
            }
            DecodeEvent::FrameDecoded { index, timestamp_ms, width, height, declared } => {
                debug!(index, timestamp_ms, width, height, "frame decoded");
                if self.is_progress_tick(index, declared) {
                    let n = index + 1;
                    let pct = if declared > 0 { n as f64 / declared as f64 * 100.0 } else { 100.0 };
                    info!("processed frames: {}/{} ({:.1}%)", n, declared, pct);
                }
            }
            DecodeEvent::EarlyStop(stop) => {
                warn!(index = stop.index(), "frame stream ended early: {}", stop);
            }
            DecodeEvent::Finished { decoded, declared } => {
                if decoded < declared {
                    warn!(decoded, declared, "decode finished with a partial result");
                } else {
                    info!(decoded, declared, "decode finished");
                }
            }
        }
    }
}
