//! headers/mod.rs
//! Container preamble: layout and parsing.
//!
//! ```text
//! 0      4  magic "RGBA"
//! 4      1  version
//! 5      1  compressed        (version >= 2 only)
//! 5|6    4  frame_count  u32
//! +4     4  max_width    u32
//! +4     4  max_height   u32
//! +4     1  grayscale
//! ```

pub mod types;
pub mod decode;

pub use types::*;
pub use decode::*;
