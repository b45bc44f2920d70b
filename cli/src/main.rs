//! rgba-decode
//!
//! Decodes RGBA frame containers and raw RGBA images into PNG files.
//! All parsing lives in `rgba-core`; this binary owns I/O, PNG encoding,
//! configuration and logging.

mod args;
mod config;
mod input;
mod naming;
mod output;
mod pipeline;
mod sink;

use std::process::ExitCode;

use anyhow::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::args::{ArgsError, Cli, Command, USAGE};
use crate::config::{Config, DEFAULT_LOG_FILTER};

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Command::Container { input, output_dir } => {
            pipeline::run_container(input, output_dir.as_deref(), config)?;
        }
        Command::Raw { input, width, height, output } => {
            pipeline::run_raw(input, *width, *height, output.as_deref())?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let cli = match Cli::parse(&args) {
        Ok(cli) => cli,
        Err(ArgsError::Help) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            return ExitCode::FAILURE;
        }
    };

    let config = Config::resolve(cli.config.as_deref());
    let filter = match &config {
        Ok(c) => c.log_filter(),
        Err(_) => DEFAULT_LOG_FILTER,
    };
    init_tracing(filter);

    let result = config
        .map_err(anyhow::Error::from)
        .and_then(|config| run(&cli, &config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
