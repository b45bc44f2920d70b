//! Hand-built container fixtures.
//!
//! The crate is decode-only, so tests assemble wire bytes themselves.
#![allow(dead_code)]

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use flate2::{write::GzEncoder, Compression};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFrame {
    pub timestamp_ms: i64,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TestFrame {
    /// Frame with a deterministic pixel pattern.
    pub fn patterned(timestamp_ms: i64, width: u32, height: u32) -> Self {
        let len = (width * height * 4) as usize;
        let pixels = (0..len)
            .map(|i| (i as u8).wrapping_mul(31).wrapping_add(timestamp_ms as u8))
            .collect();
        Self { timestamp_ms, width, height, pixels }
    }
}

pub struct HeaderSpec {
    pub version: u8,
    pub compressed: bool,
    pub frame_count: u32,
    pub max_width: u32,
    pub max_height: u32,
    pub grayscale: bool,
}

impl Default for HeaderSpec {
    fn default() -> Self {
        Self {
            version: 2,
            compressed: false,
            frame_count: 0,
            max_width: 10,
            max_height: 10,
            grayscale: false,
        }
    }
}

pub fn header_bytes(h: &HeaderSpec) -> Vec<u8> {
    let mut out = Vec::with_capacity(19);
    out.extend_from_slice(b"RGBA");
    out.push(h.version);
    if h.version >= 2 {
        out.push(h.compressed as u8);
    }
    out.write_u32::<LittleEndian>(h.frame_count).unwrap();
    out.write_u32::<LittleEndian>(h.max_width).unwrap();
    out.write_u32::<LittleEndian>(h.max_height).unwrap();
    out.push(h.grayscale as u8);
    out
}

pub fn frame_record(f: &TestFrame) -> Vec<u8> {
    let mut out = Vec::with_capacity(16 + f.pixels.len());
    out.write_i64::<LittleEndian>(f.timestamp_ms).unwrap();
    out.write_u32::<LittleEndian>(f.width).unwrap();
    out.write_u32::<LittleEndian>(f.height).unwrap();
    out.extend_from_slice(&f.pixels);
    out
}

pub fn frames_payload(frames: &[TestFrame]) -> Vec<u8> {
    frames.iter().flat_map(frame_record).collect()
}

pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(bytes).unwrap();
    enc.finish().unwrap()
}

/// Container declaring exactly `frames.len()` frames.
pub fn container(version: u8, compressed: bool, frames: &[TestFrame]) -> Vec<u8> {
    container_declaring(version, compressed, frames.len() as u32, frames)
}

pub fn container_declaring(version: u8, compressed: bool, declared: u32, frames: &[TestFrame]) -> Vec<u8> {
    let max_width = frames.iter().map(|f| f.width).max().unwrap_or(0);
    let max_height = frames.iter().map(|f| f.height).max().unwrap_or(0);
    let mut out = header_bytes(&HeaderSpec {
        version,
        compressed,
        frame_count: declared,
        max_width,
        max_height,
        grayscale: false,
    });
    let payload = frames_payload(frames);
    if compressed && version >= 2 {
        out.extend_from_slice(&gzip(&payload));
    } else {
        out.extend_from_slice(&payload);
    }
    out
}

pub fn sample_frames() -> Vec<TestFrame> {
    vec![
        TestFrame::patterned(1_700_000_000_000, 4, 3),
        TestFrame::patterned(1_700_000_000_033, 2, 2),
        TestFrame::patterned(1_700_000_000_066, 0, 0),
        TestFrame::patterned(1_700_000_000_100, 5, 1),
    ]
}
