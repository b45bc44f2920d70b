//! pipeline.rs
//! The two decode commands, end to end.
//!
//! container: read -> parse -> decode into `EncodeQueue` -> encode workers
//!            -> ordered entries -> info.txt / manifest.json
//! raw:       read -> validate size -> one PNG

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use anyhow::{bail, Context, Result};
use crossbeam::channel::{bounded, unbounded};
use tracing::{debug, info, warn};

use rgba_core::decoder::Container;
use rgba_core::events::LogObserver;
use rgba_core::framing::OwnedFrame;
use rgba_core::single::SingleFrame;
use rgba_core::sink::DecodeSummary;
use rgba_core::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};

use crate::config::Config;
use crate::input::Input;
use crate::naming;
use crate::output::{self, Manifest};
use crate::sink::{encode_frame, save_png, EncodeQueue, FrameEntry, SinkError};

/// Result of a container run.
#[derive(Debug)]
pub struct ContainerOutcome {
    pub output_dir: PathBuf,
    pub summary: DecodeSummary,
    pub frames: Vec<FrameEntry>,
    pub telemetry: TelemetrySnapshot,
}

impl ContainerOutcome {
    pub fn images_written(&self) -> usize {
        self.frames.iter().filter(|f| f.file.is_some()).count()
    }
}

fn read_input(input: &Input, timer: &mut TelemetryTimer) -> Result<Vec<u8>> {
    if matches!(input, Input::Stdin) {
        info!("reading from stdin");
    }
    let bytes = timer
        .time(Stage::Read, || input.read_all())
        .with_context(|| format!("failed to read {}", input))?;
    info!(source = %input, bytes = bytes.len(), "input loaded ({:.2} KB)", bytes.len() as f64 / 1024.0);
    Ok(bytes)
}

/// Decode a multi-frame container into one PNG per frame.
pub fn run_container(input: &Input, output_dir: Option<&Path>, config: &Config) -> Result<ContainerOutcome> {
    let mut timer = TelemetryTimer::new();
    let bytes = read_input(input, &mut timer)?;

    let mut observer = (LogObserver::new(config.progress.every), TelemetryCounters::default());
    let container = Container::parse_timed(&bytes, &config.decode, &mut observer, &mut timer)
        .with_context(|| format!("failed to decode container {}", input))?;

    let dir = naming::resolve_or(output_dir, || naming::default_output_dir(input));
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    info!(dir = %dir.display(), "writing frames");

    let workers = config.worker_count();
    let (job_tx, job_rx) = bounded::<OwnedFrame>(workers * 2);
    let (out_tx, out_rx) = unbounded::<Result<FrameEntry, SinkError>>();

    let (summary, mut frames) = thread::scope(|scope| -> Result<_> {
        // ---- Encode workers ----
        for i in 0..workers {
            let rx = job_rx.clone();
            let tx = out_tx.clone();
            let dir = dir.as_path();
            scope.spawn(move || {
                debug!(worker = i, "encode worker started");
                for frame in rx.iter() {
                    if tx.send(encode_frame(dir, &frame)).is_err() {
                        break;
                    }
                }
                debug!(worker = i, "encode worker finished");
            });
        }
        drop(job_rx);
        drop(out_tx);

        // ---- Decode into the queue ----
        let mut queue = EncodeQueue::new(job_tx);
        let written = timer.time(Stage::Frames, || container.write_to(&mut queue, &mut observer));
        debug!(queued = queue.queued(), "all frames queued");
        drop(queue);
        let summary = written.with_context(|| format!("failed to decode frames from {}", input))?;

        // ---- Collect ----
        let frames = timer.time(Stage::Write, || out_rx.iter().collect::<Result<Vec<_>, SinkError>>())?;
        Ok((summary, frames))
    })?;

    frames.sort_by_key(|f| f.index);

    let source = input.to_string();
    if config.output.write_info {
        let path = output::write_info(&dir, &source, container.header(), &frames)?;
        info!(path = %path.display(), "info written");
    }

    timer.finish();
    let telemetry = TelemetrySnapshot::from(&observer.1, &timer);

    if config.output.write_manifest {
        let manifest = Manifest {
            source,
            header: container.header(),
            codec: container.codec(),
            summary: &summary,
            frames: &frames,
            telemetry: &telemetry,
        };
        let path = output::write_manifest(&dir, &manifest)?;
        info!(path = %path.display(), "manifest written");
    }

    let outcome = ContainerOutcome { output_dir: dir, summary, frames, telemetry };
    if !outcome.summary.is_complete() {
        warn!(
            decoded = outcome.summary.decoded,
            declared = outcome.summary.declared,
            "container was shorter than its header declared"
        );
    }
    info!(
        images = outcome.images_written(),
        dir = %outcome.output_dir.display(),
        elapsed_ms = outcome.telemetry.elapsed.as_millis() as u64,
        "decode complete"
    );
    Ok(outcome)
}

/// Decode one headerless RGBA image into a PNG.
pub fn run_raw(input: &Input, width: u32, height: u32, output: Option<&Path>) -> Result<PathBuf> {
    let mut timer = TelemetryTimer::new();
    info!(width, height, "decoding raw RGBA image");
    let bytes = read_input(input, &mut timer)?;

    let frame = timer
        .time(Stage::Frames, || SingleFrame::parse(&bytes, width, height))
        .with_context(|| format!("{} is not a {}x{} RGBA image", input, width, height))?;
    if frame.trailing_bytes > 0 {
        warn!(extra = frame.trailing_bytes, "ignoring bytes past the end of the image");
    }
    if frame.pixels.is_empty() {
        bail!("cannot write an empty {}x{} image", width, height);
    }

    let path = naming::resolve_or(output, || naming::default_raw_output(input));
    timer
        .time(Stage::Write, || save_png(&path, width, height, frame.pixels))
        .with_context(|| format!("failed to write {}", path.display()))?;
    timer.finish();

    info!(
        path = %path.display(),
        width,
        height,
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "image written"
    );
    Ok(path)
}
