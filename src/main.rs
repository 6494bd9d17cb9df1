//! Persent CLI entrypoint: ranks a repository's reviewers by sentiment.

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use persent::{PersentConfig, PersentError};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::arguments::{extract_positional_arguments, parse_repository_arguments};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "persent=info";

/// Exit status for every failure.
const FAILURE_EXIT_CODE: u8 = 1;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let result = run(env::args_os().collect()).await;
    ExitCode::from(exit_status(&result, &mut io::stderr().lock()))
}

async fn run(args: Vec<OsString>) -> Result<(), PersentError> {
    let (positionals, filtered) = extract_positional_arguments(args);
    let (owner, repo) = parse_repository_arguments(&positionals)?;
    let config = load_config(filtered)?;

    cli::ranking::run(&config, &owner, &repo, &mut io::stdout().lock()).await
}

/// Maps a run outcome to the process exit status, reporting any failure on
/// `stderr`.
fn exit_status<W: Write>(result: &Result<(), PersentError>, stderr: &mut W) -> u8 {
    match result {
        Ok(()) => 0,
        Err(error) => {
            if writeln!(stderr, "{error}").is_err() {
                return FAILURE_EXIT_CODE;
            }
            FAILURE_EXIT_CODE
        }
    }
}

/// Loads configuration from CLI flags, environment, and files.
///
/// # Errors
///
/// Returns [`PersentError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config(args: Vec<OsString>) -> Result<PersentConfig, PersentError> {
    PersentConfig::load_from_iter(args).map_err(|error| PersentError::Configuration {
        message: error.to_string(),
    })
}

/// Sends logs to stderr so stdout carries only the report.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
