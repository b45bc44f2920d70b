//! rgba-core
//!
//! Pure Rust decoder for raw RGBA frame containers.
//! No filesystem, no stdio, no image encoding.
//!
//! Two entry points share one byte cursor:
//! - [`decoder::Container`] for the versioned multi-frame container
//!   (optionally gzip-compressed), and
//! - [`single::parse_single_frame`] for a headerless single image whose
//!   dimensions are known out of band.
//!
//! ```no_run
//! use rgba_core::prelude::*;
//!
//! # fn run(bytes: &[u8]) -> Result<(), DecodeError> {
//! let container = Container::parse(bytes, &DecodeOptions::default(), &mut LogObserver::default())?;
//! let set = container.decode(&mut ())?;
//! for frame in set.iter() {
//!     println!("#{} t={}ms {}x{}", frame.index, frame.timestamp_ms, frame.width, frame.height);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod config;

// Wire layers
pub mod cursor;
pub mod headers;
pub mod compression;
pub mod framing;
pub mod single;

// Orchestration and reporting
pub mod events;
pub mod sink;
pub mod telemetry;
pub mod decoder;

pub use types::{DecodeError, Result};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::DecodeOptions;
    pub use crate::decoder::{decode_container, Container, DecodedContainer, WriteError};
    pub use crate::events::{DecodeEvent, DecodeObserver, LogObserver};
    pub use crate::framing::{parse_frames, DecodedSet, EarlyStop, FrameReader, FrameView, OwnedFrame};
    pub use crate::headers::{parse_header, ContainerHeader};
    pub use crate::sink::{DecodeSummary, FrameSink, MemorySink};
    pub use crate::single::{parse_single_frame, SingleFrame};
    pub use crate::types::DecodeError;
}
