//! Command-line front end for the YouTube comment extractor.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;
use ytcomments::{ExtractError, ExtractorConfig};

mod cli;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, ExtractError> {
    let config = load_config()?;
    setup_logging(config.log_level.as_deref());
    cli::extract::run(&config)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ExtractError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ExtractorConfig, ExtractError> {
    ExtractorConfig::load().map_err(|error| ExtractError::Configuration {
        message: error.to_string(),
    })
}

fn setup_logging(level: Option<&str>) {
    let filter = level
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
