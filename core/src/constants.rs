/// Magic number opening every container.
/// "RGBA" = raw RGBA frame container
pub const MAGIC_RGBA: [u8; 4] = *b"RGBA";

/// First format version that carries the compression flag byte.
pub const VERSION_WITH_COMPRESSION: u8 = 2;

/// Fixed fields before the counts for version < 2 (magic + version).
pub const HEADER_SIZE_V1: u8 = 5;
/// Fixed fields before the counts for version >= 2 (magic + version + compression flag).
pub const HEADER_SIZE_V2: u8 = 6;

/// frame_count + max_width + max_height, three u32.
pub const HEADER_COUNTS_LEN: usize = 12;

/// Smallest buffer that can hold a version >= 2 preamble.
pub const MIN_HEADER_LEN: usize = HEADER_SIZE_V2 as usize + HEADER_COUNTS_LEN + 1; // 19

/// timestamp (i64) + width (u32) + height (u32).
pub const FRAME_RECORD_HEADER_LEN: usize = 8 + 4 + 4;

/// 8-bit R, G, B, A.
pub const BYTES_PER_PIXEL: u64 = 4;

/// Default progress cadence, in frames, used by `LogObserver`.
pub const DEFAULT_PROGRESS_EVERY: u32 = 10;
