//! decoder.rs
//!
//! Container decode pipeline: preamble -> payload -> frame records -> sink.
//!
//! Design notes:
//! - Header and decompression failures abort before any frame is parsed.
//! - A short frame stream is an early stop, reported through events and the
//!   summary, never an error.
//! - Frames borrow the payload held by `Container`, so the payload is
//!   decompressed exactly once per container.

use std::borrow::Cow;
use thiserror::Error;

use crate::compression::{decompress_payload, PayloadCodec};
use crate::config::DecodeOptions;
use crate::events::{DecodeEvent, DecodeObserver};
use crate::framing::{DecodedSet, EarlyStop, FrameReader, FrameView, OwnedFrame};
use crate::headers::{parse_header, ContainerHeader};
use crate::sink::{DecodeSummary, FrameSink, MemorySink};
use crate::telemetry::{Stage, TelemetryTimer};
use crate::types::{DecodeError, Result};

/// Failure while streaming frames into a sink.
#[derive(Debug, Error)]
pub enum WriteError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("frame sink failed: {0}")]
    Sink(#[source] E),
}

/// A parsed container whose frame stream is ready to iterate.
#[derive(Debug, Clone)]
pub struct Container<'a> {
    header: ContainerHeader,
    body_offset: usize,
    codec: PayloadCodec,
    stored_len: usize,
    payload: Cow<'a, [u8]>,
    options: DecodeOptions,
}

impl<'a> Container<'a> {
    /// Parse the preamble and materialize the frame stream.
    pub fn parse(
        buf: &'a [u8],
        options: &DecodeOptions,
        observer: &mut impl DecodeObserver,
    ) -> Result<Self> {
        Self::parse_timed(buf, options, observer, &mut TelemetryTimer::new())
    }

    /// Same as `parse`, charging header and decompression time to `timer`.
    pub fn parse_timed(
        buf: &'a [u8],
        options: &DecodeOptions,
        observer: &mut impl DecodeObserver,
        timer: &mut TelemetryTimer,
    ) -> Result<Self> {
        let (header, body_offset) = timer.time(Stage::Header, || parse_header(buf))?;
        observer.on_event(&DecodeEvent::HeaderParsed { header: &header, body_offset });

        let body = &buf[body_offset..];
        let codec = PayloadCodec::from_header(&header);
        let payload = timer.time(Stage::Decompress, || decompress_payload(codec, body))?;
        observer.on_event(&DecodeEvent::PayloadReady {
            codec,
            stored_len: body.len(),
            payload_len: payload.len(),
        });

        Ok(Self {
            header,
            body_offset,
            codec,
            stored_len: body.len(),
            payload,
            options: *options,
        })
    }

    #[inline]
    pub fn header(&self) -> &ContainerHeader {
        &self.header
    }

    #[inline]
    pub fn body_offset(&self) -> usize {
        self.body_offset
    }

    #[inline]
    pub fn codec(&self) -> PayloadCodec {
        self.codec
    }

    /// Body size as stored in the input.
    #[inline]
    pub fn stored_len(&self) -> usize {
        self.stored_len
    }

    /// The frame stream, decompressed if needed.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Lazy frame iterator over the payload, bounded by the declared count.
    pub fn frames(&self) -> FrameReader<'_> {
        FrameReader::new(&self.payload, self.header.frame_count)
    }

    fn check_bounds(&self, frame: &FrameView<'_>) -> Result<()> {
        if self.options.enforce_bounds && !self.header.within_bounds(frame.width, frame.height) {
            return Err(DecodeError::ExceedsBounds {
                index: frame.index,
                width: frame.width,
                height: frame.height,
                max_width: self.header.max_width,
                max_height: self.header.max_height,
            });
        }
        Ok(())
    }

    fn frame_event(&self, frame: &FrameView<'_>) -> DecodeEvent<'static> {
        DecodeEvent::FrameDecoded {
            index: frame.index,
            timestamp_ms: frame.timestamp_ms,
            width: frame.width,
            height: frame.height,
            declared: self.header.frame_count,
        }
    }

    fn finish_events(
        &self,
        decoded: u32,
        early_stop: Option<&EarlyStop>,
        observer: &mut impl DecodeObserver,
    ) {
        if let Some(stop) = early_stop {
            observer.on_event(&DecodeEvent::EarlyStop(stop));
        }
        observer.on_event(&DecodeEvent::Finished { decoded, declared: self.header.frame_count });
    }

    /// Decode every available frame into a `DecodedSet`.
    pub fn decode(&self, observer: &mut impl DecodeObserver) -> Result<DecodedSet<'_>> {
        let mut reader = self.frames();
        let mut frames = Vec::with_capacity(reader.size_hint().1.unwrap_or(0).min(1024));

        for frame in reader.by_ref() {
            self.check_bounds(&frame)?;
            observer.on_event(&self.frame_event(&frame));
            frames.push(frame);
        }

        let early_stop = reader.early_stop().copied();
        self.finish_events(reader.decoded(), early_stop.as_ref(), observer);

        Ok(DecodedSet {
            frames,
            declared: self.header.frame_count,
            early_stop,
            trailing_bytes: reader.remaining(),
        })
    }

    /// Stream frames into `sink` in order, then call `sink.finish`.
    pub fn write_to<S: FrameSink>(
        &self,
        sink: &mut S,
        observer: &mut impl DecodeObserver,
    ) -> std::result::Result<DecodeSummary, WriteError<S::Error>> {
        let mut reader = self.frames();

        for frame in reader.by_ref() {
            self.check_bounds(&frame)?;
            sink.write_frame(&frame).map_err(WriteError::Sink)?;
            observer.on_event(&self.frame_event(&frame));
        }

        let summary = DecodeSummary {
            decoded: reader.decoded(),
            declared: self.header.frame_count,
            early_stop: reader.early_stop().copied(),
            trailing_bytes: reader.remaining(),
        };

        sink.finish(&summary).map_err(WriteError::Sink)?;
        self.finish_events(summary.decoded, summary.early_stop.as_ref(), observer);

        Ok(summary)
    }
}

/// A fully decoded container with owned frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedContainer {
    pub header: ContainerHeader,
    pub frames: Vec<OwnedFrame>,
    pub early_stop: Option<EarlyStop>,
}

/// Decode a whole container into owned frames.
pub fn decode_container(buf: &[u8], options: &DecodeOptions) -> Result<DecodedContainer> {
    let container = Container::parse(buf, options, &mut ())?;
    let mut sink = MemorySink::new();

    let summary = container.write_to(&mut sink, &mut ()).map_err(|e| match e {
        WriteError::Decode(e) => e,
        WriteError::Sink(never) => match never {},
    })?;

    Ok(DecodedContainer {
        header: *container.header(),
        frames: sink.frames,
        early_stop: summary.early_stop,
    })
}
