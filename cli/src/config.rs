//! config.rs
//! Optional TOML configuration for the CLI.
//!
//! ```toml
//! workers = 4
//! log_filter = "rgba_decode=debug"
//!
//! [decode]
//! enforce_bounds = true
//!
//! [output]
//! write_info = true
//! write_manifest = false
//!
//! [progress]
//! every = 25
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use rgba_core::config::DecodeOptions;
use rgba_core::constants::DEFAULT_PROGRESS_EVERY;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "rgba-decode.toml";

pub const DEFAULT_LOG_FILTER: &str = "rgba_decode=info,rgba_core=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

fn default_true() -> bool {
    true
}

fn default_progress_every() -> u32 {
    DEFAULT_PROGRESS_EVERY
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub write_info: bool,
    #[serde(default = "default_true")]
    pub write_manifest: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            write_info: true,
            write_manifest: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgressConfig {
    /// Log a progress line every N frames.
    #[serde(default = "default_progress_every")]
    pub every: u32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            every: default_progress_every(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub decode: DecodeOptions,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
    /// PNG encode workers; 0 means one per CPU.
    #[serde(default)]
    pub workers: usize,
    /// `tracing` filter directives, overridden by `RUST_LOG`.
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl Config {
    /// Load `path` if given, else `DEFAULT_CONFIG_PATH` if it exists, else defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load_from(p),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Self::load_from(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn worker_count(&self) -> usize {
        match self.workers {
            0 => num_cpus::get().max(1),
            n => n,
        }
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
