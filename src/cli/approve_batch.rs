//! Batch approval operation.

use std::io;

use greenlight::telemetry::StderrJsonlTelemetrySink;
use greenlight::{
    ApprovalError, BatchResult, BatchRunner, FileAuditLogger, GreenlightConfig,
    OctocrabReviewGateway,
};

use super::output::write_batch_log;

/// Runs one batch of approvals described by the configuration.
///
/// The URL blob is read from the configured file, or from standard input when
/// no file is configured.
///
/// # Errors
///
/// Returns [`ApprovalError::NoCredentialSelected`] when no credential display
/// name is configured, [`ApprovalError::Configuration`] when the credential
/// store cannot be loaded, and [`ApprovalError::Io`] when the URL blob cannot
/// be read. Per-item failures do not error; they are reported in the batch
/// log.
pub async fn run(config: &GreenlightConfig) -> Result<BatchResult, ApprovalError> {
    let selected_name = config.require_credential()?;
    let credentials = config.load_credentials()?;
    let urls_blob = read_urls_blob(config)?;

    let gateway = OctocrabReviewGateway::new(config.api_base()?);
    let audit = FileAuditLogger::new(
        config.audit_log_dir(),
        Box::new(StderrJsonlTelemetrySink),
    );
    let runner = BatchRunner::new(
        &gateway,
        &audit,
        config.operator(),
        config.approval_message(),
    );

    let result = runner.run(&credentials, selected_name, &urls_blob).await;
    write_batch_log(&result)?;
    Ok(result)
}

/// Reads the newline-delimited URL blob from the configured source.
fn read_urls_blob(config: &GreenlightConfig) -> Result<String, ApprovalError> {
    match config.urls_file.as_deref() {
        Some(path) => std::fs::read_to_string(path).map_err(|error| ApprovalError::Io {
            message: format!("failed to read URL file '{path}': {error}"),
        }),
        None => io::read_to_string(io::stdin()).map_err(|error| ApprovalError::Io {
            message: format!("failed to read URLs from stdin: {error}"),
        }),
    }
}
