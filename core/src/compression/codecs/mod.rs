//! compression/codecs/mod.rs
//! Decompressor implementations.

pub mod gzip;

pub use gzip::*;
