//! output.rs
//! `info.txt` and `manifest.json` written next to the frames.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use rgba_core::compression::PayloadCodec;
use rgba_core::headers::ContainerHeader;
use rgba_core::sink::DecodeSummary;
use rgba_core::telemetry::TelemetrySnapshot;

use crate::naming::{INFO_FILE, MANIFEST_FILE};
use crate::sink::{FrameEntry, SinkError};

/// Everything known about one decoded container.
#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub source: String,
    pub header: &'a ContainerHeader,
    pub codec: PayloadCodec,
    pub summary: &'a DecodeSummary,
    pub frames: &'a [FrameEntry],
    pub telemetry: &'a TelemetrySnapshot,
}

fn write_file(path: PathBuf, contents: &[u8]) -> Result<PathBuf, SinkError> {
    fs::write(&path, contents).map_err(|source| SinkError::Io { path: path.clone(), source })?;
    Ok(path)
}

pub fn render_info(source: &str, header: &ContainerHeader, frames: &[FrameEntry]) -> String {
    let written: Vec<&FrameEntry> = frames.iter().filter(|f| f.file.is_some()).collect();
    let skipped = frames.len() - written.len();

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Binary RGBA Decode Info");
    let _ = writeln!(out, "{}\n", "=".repeat(50));
    let _ = writeln!(out, "Source file: {}", source);
    let _ = writeln!(out, "Format version: {}", header.version);
    let _ = writeln!(out, "Total frames: {}", header.frame_count);
    let _ = writeln!(out, "Max dimensions: {}x{}", header.max_width, header.max_height);
    let _ = writeln!(out, "Grayscale: {}", header.grayscale);
    let _ = writeln!(out, "Decoded frames: {}", written.len());
    if skipped > 0 {
        let _ = writeln!(out, "Skipped empty frames: {}", skipped);
    }
    let _ = writeln!(out, "\nFrames:");
    for (n, f) in written.iter().enumerate() {
        if let Some(file) = &f.file {
            let _ = writeln!(out, "  {}. {} (timestamp: {}ms)", n + 1, file, f.timestamp_ms);
        }
    }
    out
}

pub fn write_info(
    dir: &Path,
    source: &str,
    header: &ContainerHeader,
    frames: &[FrameEntry],
) -> Result<PathBuf, SinkError> {
    write_file(dir.join(INFO_FILE), render_info(source, header, frames).as_bytes())
}

pub fn write_manifest(dir: &Path, manifest: &Manifest<'_>) -> Result<PathBuf, SinkError> {
    let json = serde_json::to_vec_pretty(manifest)?;
    write_file(dir.join(MANIFEST_FILE), &json)
}
