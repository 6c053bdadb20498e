//! Audit trail events and the append-only audit logger.
//!
//! Every batch emits a start event, one event per processed pull request,
//! and an end event carrying totals. Events serialise to one plain-text line
//! each and are partitioned into one log file per calendar day. Recording is
//! fail-soft: an audit write failure must never change an approval outcome.

mod file;

pub use file::FileAuditLogger;

use chrono::{DateTime, Local};

use crate::batch::RequestId;

/// Action tag identifying what an audit event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    /// A batch started processing.
    BatchStart,
    /// One pull request was approved.
    ItemApproved,
    /// One pull request failed or was rejected.
    ItemFailed,
    /// A batch finished processing.
    BatchEnd,
}

impl AuditAction {
    /// Stable tag written into the audit line.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::BatchStart => "PR_APPROVAL_BATCH_START",
            Self::ItemApproved => "PR_APPROVAL_SUCCESS",
            Self::ItemFailed => "PR_APPROVAL_FAILED",
            Self::BatchEnd => "PR_APPROVAL_BATCH_END",
        }
    }
}

/// One audit trail record.
///
/// Fields are public so tests can construct events with fixed timestamps;
/// production code goes through the constructors, which stamp the current
/// local time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// Local time the event was created.
    pub timestamp: DateTime<Local>,
    /// Correlation id of the batch that produced the event.
    pub request_id: RequestId,
    /// What this event records.
    pub action: AuditAction,
    /// Operator on whose behalf the batch ran.
    pub actor: String,
    /// Display name of the credential used; never the token itself.
    pub credential_name: String,
    /// Item count associated with the action.
    pub count: usize,
    /// Pull request URL for per-item events.
    pub pr_url: Option<String>,
    /// Error or summary text when present.
    pub error: Option<String>,
}

impl AuditEvent {
    /// Batch-start event carrying the filtered item count.
    #[must_use]
    pub fn batch_start(request_id: &RequestId, actor: &str, credential_name: &str, total: usize) -> Self {
        Self {
            timestamp: Local::now(),
            request_id: request_id.clone(),
            action: AuditAction::BatchStart,
            actor: actor.to_owned(),
            credential_name: credential_name.to_owned(),
            count: total,
            pr_url: None,
            error: None,
        }
    }

    /// Per-item success event.
    #[must_use]
    pub fn item_approved(
        request_id: &RequestId,
        actor: &str,
        credential_name: &str,
        pr_url: &str,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            request_id: request_id.clone(),
            action: AuditAction::ItemApproved,
            actor: actor.to_owned(),
            credential_name: credential_name.to_owned(),
            count: 1,
            pr_url: Some(pr_url.to_owned()),
            error: None,
        }
    }

    /// Per-item failure event carrying the failure description.
    #[must_use]
    pub fn item_failed(
        request_id: &RequestId,
        actor: &str,
        credential_name: &str,
        pr_url: &str,
        error: &str,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            request_id: request_id.clone(),
            action: AuditAction::ItemFailed,
            actor: actor.to_owned(),
            credential_name: credential_name.to_owned(),
            count: 0,
            pr_url: Some(pr_url.to_owned()),
            error: Some(error.to_owned()),
        }
    }

    /// Batch-end event carrying totals as summary text.
    #[must_use]
    pub fn batch_end(
        request_id: &RequestId,
        actor: &str,
        credential_name: &str,
        succeeded: usize,
        total: usize,
        failed: usize,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            request_id: request_id.clone(),
            action: AuditAction::BatchEnd,
            actor: actor.to_owned(),
            credential_name: credential_name.to_owned(),
            count: succeeded,
            pr_url: None,
            error: Some(format!(
                "Total: {total}, Success: {succeeded}, Failed: {failed}"
            )),
        }
    }

    /// Serialises the event into its single audit-log line.
    #[must_use]
    pub fn format_line(&self) -> String {
        let mut line = format!(
            "[{timestamp}] REQUEST_ID: {request_id} | ACTION: {action} | USER: {actor} | TOKEN: {credential} | COUNT: {count}",
            timestamp = self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            request_id = self.request_id,
            action = self.action.tag(),
            actor = self.actor,
            credential = self.credential_name,
            count = self.count,
        );

        if let Some(pr_url) = &self.pr_url {
            line.push_str(&format!(" | PR_URL: {pr_url}"));
        }

        if let Some(error) = &self.error {
            line.push_str(&format!(" | ERROR: {error}"));
        }

        line
    }
}

/// A sink that durably records audit events.
///
/// Recording is infallible by contract: implementations recover from their
/// own I/O failures and report them through an observability channel instead
/// of surfacing them to the batch.
pub trait AuditLogger: Send + Sync {
    /// Records one audit event.
    fn record(&self, event: &AuditEvent);
}
