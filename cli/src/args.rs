//! args.rs
//! Command-line parsing.
//!
//! rgba-decode container <INPUT|-> [OUTPUT_DIR] [--config FILE]
//! rgba-decode raw <INPUT|-> <WIDTH> <HEIGHT> [OUTPUT.png] [--config FILE]

use std::path::PathBuf;
use thiserror::Error;

use crate::input::Input;

pub const USAGE: &str = "\
Usage:
  rgba-decode container <INPUT|-> [OUTPUT_DIR] [--config FILE]
  rgba-decode raw <INPUT|-> <WIDTH> <HEIGHT> [OUTPUT.png] [--config FILE]

Commands:
  container   Decode a multi-frame RGBA container into PNG frames
  raw         Decode one headerless RGBA image of known size into a PNG

Arguments:
  INPUT       Input file, or '-' to read stdin
  OUTPUT_DIR  Frame directory (default: <INPUT without extension>_frames,
              or decoded_frames for stdin)
  OUTPUT.png  Image path (default: <INPUT>.png, or decoded_output.png for stdin)

Options:
  --config FILE  TOML configuration (default: ./rgba-decode.toml if present)
  -h, --help     Show this help";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("help requested")]
    Help,
    #[error("no command given")]
    MissingCommand,
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("missing required argument <{0}>")]
    MissingArgument(&'static str),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("{flag} needs a value")]
    MissingValue { flag: &'static str },
    #[error("<{name}> must be a non-negative integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Container {
        input: Input,
        output_dir: Option<PathBuf>,
    },
    Raw {
        input: Input,
        width: u32,
        height: u32,
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub command: Command,
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse arguments, program name excluded.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, ArgsError> {
        let mut config = None;
        let mut positional: Vec<&str> = Vec::new();

        let mut iter = args.iter().map(|s| s.as_ref());
        while let Some(arg) = iter.next() {
            match arg {
                "-h" | "--help" => return Err(ArgsError::Help),
                "--config" => {
                    let value = iter.next().ok_or(ArgsError::MissingValue { flag: "--config" })?;
                    config = Some(PathBuf::from(value));
                }
                _ => match arg.strip_prefix("--config=") {
                    Some("") => return Err(ArgsError::MissingValue { flag: "--config" }),
                    Some(value) => config = Some(PathBuf::from(value)),
                    None if arg.starts_with("--") => {
                        return Err(ArgsError::UnexpectedArgument(arg.to_string()))
                    }
                    None => positional.push(arg),
                },
            }
        }

        let mut positional = positional.into_iter();
        let command = match positional.next() {
            None => return Err(ArgsError::MissingCommand),
            Some("container") => {
                let input = positional.next().ok_or(ArgsError::MissingArgument("INPUT"))?;
                Command::Container {
                    input: Input::from_arg(input),
                    output_dir: positional.next().map(PathBuf::from),
                }
            }
            Some("raw") => {
                let input = positional.next().ok_or(ArgsError::MissingArgument("INPUT"))?;
                let width = parse_dim("WIDTH", positional.next())?;
                let height = parse_dim("HEIGHT", positional.next())?;
                Command::Raw {
                    input: Input::from_arg(input),
                    width,
                    height,
                    output: positional.next().map(PathBuf::from),
                }
            }
            Some(other) => return Err(ArgsError::UnknownCommand(other.to_string())),
        };

        if let Some(extra) = positional.next() {
            return Err(ArgsError::UnexpectedArgument(extra.to_string()));
        }

        Ok(Self { command, config })
    }
}

fn parse_dim(name: &'static str, value: Option<&str>) -> Result<u32, ArgsError> {
    let value = value.ok_or(ArgsError::MissingArgument(name))?;
    value.parse().map_err(|_| ArgsError::InvalidNumber { name, value: value.to_string() })
}
