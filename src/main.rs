//! Greenlight CLI entrypoint for batch pull request approval.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use greenlight::{ApprovalError, GreenlightConfig};
use ortho_config::OrthoConfig;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ApprovalError> {
    let config = load_config()?;
    cli::approve_batch::run(&config).await.map(|_result| ())
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ApprovalError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<GreenlightConfig, ApprovalError> {
    GreenlightConfig::load().map_err(|error| ApprovalError::Configuration {
        message: error.to_string(),
    })
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();
}
