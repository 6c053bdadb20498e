//! File-backed audit logger writing one partition per calendar day.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::Dir;

use crate::github::error::ApprovalError;
use crate::telemetry::{TelemetryEvent, TelemetrySink};

use super::{AuditEvent, AuditLogger};

/// Appends audit lines to `pr-approvals-{date}.log` partitions under a
/// directory created on demand.
///
/// Recording fails soft: I/O errors are reported through `tracing` and the
/// configured telemetry sink, then swallowed, so a full disk never aborts a
/// batch.
pub struct FileAuditLogger {
    directory: Utf8PathBuf,
    telemetry: Box<dyn TelemetrySink>,
}

impl FileAuditLogger {
    /// Creates a logger writing partitions under `directory`.
    #[must_use]
    pub fn new(directory: impl Into<Utf8PathBuf>, telemetry: Box<dyn TelemetrySink>) -> Self {
        Self {
            directory: directory.into(),
            telemetry,
        }
    }

    fn try_append(&self, event: &AuditEvent) -> Result<(), ApprovalError> {
        let file_name = format!("pr-approvals-{}.log", event.timestamp.format("%Y-%m-%d"));
        let partition_dir = self.open_partition_dir()?;

        let mut file = partition_dir
            .open_with(
                &file_name,
                OpenOptions::new().create(true).append(true),
            )
            .map_err(|error| ApprovalError::Io {
                message: format!("failed to open audit partition '{file_name}': {error}"),
            })?;

        writeln!(file, "{}", event.format_line()).map_err(|error| ApprovalError::Io {
            message: format!("failed to append audit line to '{file_name}': {error}"),
        })
    }

    /// Opens the audit directory, creating it (and parents) when absent.
    fn open_partition_dir(&self) -> Result<Dir, ApprovalError> {
        let (root, relative) = if self.directory.is_absolute() {
            let root =
                Dir::open_ambient_dir("/", ambient_authority()).map_err(|error| {
                    ApprovalError::Io {
                        message: format!("failed to open root directory for audit logs: {error}"),
                    }
                })?;
            let relative = self.directory.strip_prefix("/").map_err(|_| ApprovalError::Io {
                message: format!("failed to normalise audit directory '{}'", self.directory),
            })?;
            (root, relative)
        } else {
            let root =
                Dir::open_ambient_dir(".", ambient_authority()).map_err(|error| {
                    ApprovalError::Io {
                        message: format!(
                            "failed to open current directory for audit logs: {error}"
                        ),
                    }
                })?;
            (root, self.directory.as_path())
        };

        if relative.as_str().is_empty() || relative == Utf8Path::new(".") {
            return Ok(root);
        }

        root.create_dir_all(relative)
            .map_err(|error| ApprovalError::Io {
                message: format!(
                    "failed to create audit directory '{}': {error}",
                    self.directory
                ),
            })?;
        root.open_dir(relative).map_err(|error| ApprovalError::Io {
            message: format!("failed to open audit directory '{}': {error}", self.directory),
        })
    }
}

impl AuditLogger for FileAuditLogger {
    fn record(&self, event: &AuditEvent) {
        match self.try_append(event) {
            Ok(()) => {
                tracing::info!(
                    request_id = %event.request_id,
                    action = event.action.tag(),
                    actor = %event.actor,
                    credential = %event.credential_name,
                    count = event.count,
                    "audit event recorded"
                );
            }
            Err(error) => {
                tracing::warn!(
                    request_id = %event.request_id,
                    action = event.action.tag(),
                    "audit log write failed: {error}"
                );
                self.telemetry.record(TelemetryEvent::AuditWriteFailed {
                    action: event.action.tag().to_owned(),
                    message: error.to_string(),
                });
            }
        }
    }
}
