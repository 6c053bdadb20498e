//! Sequential batch driver emitting audit events and the running log.

use crate::approval::{ApprovalEngine, ApprovalOutcome};
use crate::audit::{AuditEvent, AuditLogger};
use crate::config::CredentialSet;
use crate::github::gateway::ReviewGateway;

use super::request::RequestId;
use super::result::BatchResult;

/// Drives a list of pull request URLs through the approval engine.
///
/// Items are processed strictly sequentially in input order; a slow upstream
/// call blocks the remainder of the batch. Per-item failures never abort the
/// remaining items.
pub struct BatchRunner<'deps, Gateway>
where
    Gateway: ReviewGateway,
{
    gateway: &'deps Gateway,
    audit: &'deps dyn AuditLogger,
    actor: String,
    approval_message: String,
}

impl<'deps, Gateway> BatchRunner<'deps, Gateway>
where
    Gateway: ReviewGateway,
{
    /// Creates a runner recording audit events on behalf of `actor`.
    #[must_use]
    pub fn new(
        gateway: &'deps Gateway,
        audit: &'deps dyn AuditLogger,
        actor: impl Into<String>,
        approval_message: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            audit,
            actor: actor.into(),
            approval_message: approval_message.into(),
        }
    }

    /// Processes one newline-delimited URL blob under a fresh request id.
    ///
    /// When no credential matches `selected_name` the batch fails before any
    /// item is processed and no audit event is emitted.
    pub async fn run(
        &self,
        credentials: &CredentialSet,
        selected_name: &str,
        urls_blob: &str,
    ) -> BatchResult {
        let request_id = RequestId::generate();
        let urls = filter_candidate_urls(urls_blob);
        let total = urls.len();
        let mut log: Vec<String> = Vec::new();

        let Some(credential) = credentials.find(selected_name) else {
            log.push("❌ No valid GitHub access token selected!".to_owned());
            return BatchResult {
                request_id,
                total: 0,
                succeeded: 0,
                failed: Vec::new(),
                log: log.join("\n"),
            };
        };
        let name = credential.display_name();

        self.audit
            .record(&AuditEvent::batch_start(&request_id, &self.actor, name, total));
        log.push(format!(
            "🚀 Starting batch processing of {total} PR(s) using token: {name}... \
             [RequestID: {request_id}]"
        ));

        let engine = ApprovalEngine::new(self.gateway, self.approval_message.as_str());
        let mut succeeded = 0usize;
        let mut failed: Vec<String> = Vec::new();

        for (index, url) in urls.iter().enumerate() {
            let position = index + 1;
            log.push(String::new());
            log.push(format!("📋 [{position}/{total}] Processing: {url}"));

            let report = engine.approve(url, credential.access_token()).await;
            log.extend(report.narrative.iter().cloned());

            match &report.outcome {
                ApprovalOutcome::Approved => {
                    succeeded += 1;
                    log.push(format!("✅ [{position}/{total}] Approval completed by {name}"));
                    self.audit.record(&AuditEvent::item_approved(
                        &request_id,
                        &self.actor,
                        name,
                        url,
                    ));
                }
                other => {
                    let message = other
                        .failure_message()
                        .unwrap_or_else(|| "unknown failure".to_owned());
                    log.push(format!("❌ [{position}/{total}] Error: {message}"));
                    self.audit.record(&AuditEvent::item_failed(
                        &request_id,
                        &self.actor,
                        name,
                        url,
                        &message,
                    ));
                    failed.push((*url).to_owned());
                }
            }
        }

        self.audit.record(&AuditEvent::batch_end(
            &request_id,
            &self.actor,
            name,
            succeeded,
            total,
            failed.len(),
        ));

        push_summary(&mut log, &request_id, name, total, succeeded, &failed);

        BatchResult {
            request_id,
            total,
            succeeded,
            failed,
            log: log.join("\n"),
        }
    }
}

/// Cheap substring pre-filter applied before strict parsing.
///
/// Lines failing this filter are silently excluded from the batch total
/// rather than counted as failures; lines passing it but failing strict
/// parsing become explicit failures.
fn filter_candidate_urls(blob: &str) -> Vec<&str> {
    blob.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| line.contains("github.com") && line.contains("/pull/"))
        .collect()
}

fn push_summary(
    log: &mut Vec<String>,
    request_id: &RequestId,
    credential_name: &str,
    total: usize,
    succeeded: usize,
    failed: &[String],
) {
    log.push(String::new());
    log.push("=".repeat(50));
    log.push("📊 Batch Processing Summary:".to_owned());
    log.push(format!("   Request ID: {request_id}"));
    log.push(format!("   Token Used: {credential_name}"));
    log.push(format!("   Total PRs: {total}"));
    log.push(format!("   Successful: {succeeded}"));
    log.push(format!("   Failed: {}", failed.len()));
    if !failed.is_empty() {
        log.push(String::new());
        log.push("❌ Failed URLs:".to_owned());
        for url in failed {
            log.push(format!("   - {url}"));
        }
    }
}
