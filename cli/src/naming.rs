//! naming.rs
//! Output paths derived from the input.

use std::path::{Path, PathBuf};

use crate::input::Input;

pub const STDIN_FRAMES_DIR: &str = "decoded_frames";
pub const STDIN_RAW_OUTPUT: &str = "decoded_output.png";
pub const INFO_FILE: &str = "info.txt";
pub const MANIFEST_FILE: &str = "manifest.json";

/// `frame_00001_t1700000000000ms.png` for the first frame.
pub fn frame_file_name(index: u32, timestamp_ms: i64) -> String {
    format!("frame_{:05}_t{}ms.png", index as u64 + 1, timestamp_ms)
}

/// `<input without extension>_frames`, or `decoded_frames` for stdin.
pub fn default_output_dir(input: &Input) -> PathBuf {
    match input.path() {
        None => PathBuf::from(STDIN_FRAMES_DIR),
        Some(p) => {
            let mut dir = p.with_extension("").into_os_string();
            dir.push("_frames");
            PathBuf::from(dir)
        }
    }
}

/// `<input>` with a `.png` extension, or `decoded_output.png` for stdin.
pub fn default_raw_output(input: &Input) -> PathBuf {
    match input.path() {
        None => PathBuf::from(STDIN_RAW_OUTPUT),
        Some(p) => p.with_extension("png"),
    }
}

pub fn resolve_or<F>(explicit: Option<&Path>, fallback: F) -> PathBuf
where
    F: FnOnce() -> PathBuf,
{
    explicit.map(Path::to_path_buf).unwrap_or_else(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_names() {
        assert_eq!(frame_file_name(0, 1_700_000_000_000), "frame_00001_t1700000000000ms.png");
        assert_eq!(frame_file_name(41, -5), "frame_00042_t-5ms.png");
        assert_eq!(frame_file_name(123_455, 0), "frame_123456_t0ms.png");
    }

    #[test]
    fn output_dirs() {
        assert_eq!(default_output_dir(&Input::Stdin), PathBuf::from("decoded_frames"));
        assert_eq!(
            default_output_dir(&Input::from_arg("recs/recording.bin")),
            PathBuf::from("recs/recording_frames")
        );
        assert_eq!(default_output_dir(&Input::from_arg("capture")), PathBuf::from("capture_frames"));
    }

    #[test]
    fn raw_outputs() {
        assert_eq!(default_raw_output(&Input::Stdin), PathBuf::from("decoded_output.png"));
        assert_eq!(default_raw_output(&Input::from_arg("image.raw")), PathBuf::from("image.png"));
        assert_eq!(default_raw_output(&Input::from_arg("image")), PathBuf::from("image.png"));
    }

    #[test]
    fn explicit_path_wins() {
        let p = resolve_or(Some(Path::new("out")), || PathBuf::from("fallback"));
        assert_eq!(p, PathBuf::from("out"));
        assert_eq!(resolve_or(None, || PathBuf::from("fallback")), PathBuf::from("fallback"));
    }
}
