//! compression/mod.rs
//! Optional whole-payload decompression.
//!
//! Notes:
//! - Only the frame stream is ever compressed; the preamble is always plain.
//! - No streaming: the decoded payload is held in memory next to the input.

pub mod types;
pub mod registry;
pub mod codecs;

pub use types::*;
pub use registry::*;
