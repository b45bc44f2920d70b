//! Frame record stream.
//!
//! Responsibilities:
//! - Define frame views and the early-stop policy
//! - Decode records lazily from a payload
//!
//! Non-responsibilities:
//! - Header parsing
//! - Decompression
//! - IO

pub mod types;
pub mod decode;

pub use types::{
    DecodedSet,
    EarlyStop,
    FrameView,
    OwnedFrame,
};
pub use decode::{parse_frames, FrameReader};
