//! sink.rs
//! PNG frame sink.
//!
//! The decoder thread copies each frame into an `EncodeQueue`; encode workers
//! pull from the queue, write one PNG per frame and report a `FrameEntry`.
//! Entries come back out of order and are sorted by index afterwards.

use std::io;
use std::path::{Path, PathBuf};

use crossbeam::channel::Sender;
use image::{ColorType, ImageFormat};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use rgba_core::framing::{FrameView, OwnedFrame};
use rgba_core::sink::FrameSink;

use crate::naming::frame_file_name;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to encode {path}: {source}")]
    Png {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("cannot encode an empty {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },

    #[error("encode workers stopped before the last frame was queued")]
    QueueClosed,
}

/// One written (or skipped) frame, as listed in `info.txt` and `manifest.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameEntry {
    pub index: u32,
    /// `None` for zero-area frames, which have no PNG.
    pub file: Option<String>,
    pub timestamp_ms: i64,
    pub width: u32,
    pub height: u32,
    /// CRC32 of the raw RGBA bytes.
    pub crc32: u32,
}

/// Write `pixels` as an RGBA PNG.
pub fn save_png(path: &Path, width: u32, height: u32, pixels: &[u8]) -> Result<(), SinkError> {
    if width == 0 || height == 0 {
        return Err(SinkError::EmptyImage { width, height });
    }
    image::save_buffer_with_format(path, pixels, width, height, ColorType::Rgba8, ImageFormat::Png)
        .map_err(|source| SinkError::Png { path: path.to_path_buf(), source })
}

/// Encode one frame into `dir`.
pub fn encode_frame(dir: &Path, frame: &OwnedFrame) -> Result<FrameEntry, SinkError> {
    let crc32 = crc32fast::hash(&frame.pixels);
    let mut entry = FrameEntry {
        index: frame.index,
        file: None,
        timestamp_ms: frame.timestamp_ms,
        width: frame.width,
        height: frame.height,
        crc32,
    };

    if frame.pixels.is_empty() {
        warn!(
            index = frame.index,
            width = frame.width,
            height = frame.height,
            "zero-area frame has no image, skipped"
        );
        return Ok(entry);
    }

    let name = frame_file_name(frame.index, frame.timestamp_ms);
    save_png(&dir.join(&name), frame.width, frame.height, &frame.pixels)?;
    debug!(index = frame.index, file = %name, "frame written");

    entry.file = Some(name);
    Ok(entry)
}

/// Hands frames to the encode workers.
pub struct EncodeQueue {
    tx: Sender<OwnedFrame>,
    queued: u32,
}

impl EncodeQueue {
    pub fn new(tx: Sender<OwnedFrame>) -> Self {
        Self { tx, queued: 0 }
    }

    pub fn queued(&self) -> u32 {
        self.queued
    }
}

impl FrameSink for EncodeQueue {
    type Error = SinkError;

    fn write_frame(&mut self, frame: &FrameView<'_>) -> Result<(), SinkError> {
        self.tx
            .send(frame.to_owned_frame())
            .map_err(|_| SinkError::QueueClosed)?;
        self.queued += 1;
        Ok(())
    }
}
