//! State machine driving one pull request from URL to terminal outcome.

use crate::github::error::ApprovalError;
use crate::github::gateway::ReviewGateway;
use crate::github::locator::PullRequestLocator;
use crate::github::token::AccessToken;

use super::outcome::{ApprovalOutcome, ApprovalReport};

/// Drives the approval flow for a single pull request.
///
/// Transitions are terminal: parse the URL, validate token syntax, fetch the
/// pull request, check its state, submit the approval. No step retries; the
/// first failure classifies the outcome.
pub struct ApprovalEngine<'gateway, Gateway>
where
    Gateway: ReviewGateway,
{
    gateway: &'gateway Gateway,
    message: String,
}

impl<'gateway, Gateway> ApprovalEngine<'gateway, Gateway>
where
    Gateway: ReviewGateway,
{
    /// Creates an engine submitting approvals with the given review message.
    #[must_use]
    pub fn new(gateway: &'gateway Gateway, message: impl Into<String>) -> Self {
        Self {
            gateway,
            message: message.into(),
        }
    }

    /// Runs the full approval flow for one pull request URL.
    ///
    /// Never fails outright: every failure mode is folded into the returned
    /// report so a batch can continue with its remaining items.
    pub async fn approve(&self, pr_url: &str, token_value: &str) -> ApprovalReport {
        let mut narrative = Vec::new();

        let locator = match PullRequestLocator::parse(pr_url) {
            Ok(parsed) => parsed,
            Err(error) => {
                narrative.push("❌ Invalid PR URL format".to_owned());
                return ApprovalReport::new(ApprovalOutcome::Failed(error), narrative);
            }
        };
        narrative.push(format!("📋 Parsed PR: {}", locator.reference()));

        let token = match AccessToken::new(token_value) {
            Ok(validated) => validated,
            Err(error) => {
                narrative.push("❌ Invalid GitHub token format".to_owned());
                return ApprovalReport::new(ApprovalOutcome::Failed(error), narrative);
            }
        };

        let snapshot = match self.gateway.pull_request(&locator, &token).await {
            Ok(fetched) => fetched,
            Err(error) => {
                if matches!(error, ApprovalError::PullRequestNotFound { .. }) {
                    narrative.push("❌ PR not found or access denied.".to_owned());
                } else {
                    narrative.push(format!("❌ Error: {error}"));
                }
                return ApprovalReport::new(ApprovalOutcome::Failed(error), narrative);
            }
        };

        let title = snapshot.title.as_deref().unwrap_or("untitled pull request");
        narrative.push(format!("✅ PR found: '{title}'"));
        narrative.push(format!("📊 PR state: {}", snapshot.state));

        if !snapshot.state.is_open() {
            narrative.push(format!("❌ Cannot approve a {} PR", snapshot.state));
            return ApprovalReport::new(
                ApprovalOutcome::Rejected {
                    state: snapshot.state.as_str().to_owned(),
                },
                narrative,
            );
        }

        if let Some(author) = snapshot.author.as_deref() {
            narrative.push(format!("👤 PR author: {author}"));
        }

        narrative.push("🚀 Attempting to approve PR...".to_owned());
        match self.gateway.submit_approval(&locator, &token, &self.message).await {
            Ok(()) => {
                narrative.push("✅ PR approved successfully!".to_owned());
                ApprovalReport::new(ApprovalOutcome::Approved, narrative)
            }
            Err(error) => {
                if let ApprovalError::ApprovalRejected { status, body } = &error {
                    narrative.push(format!("❌ Failed to approve PR: {status}"));
                    narrative.push(format!("📄 Response: {body}"));
                    if let Some(hint) = rejection_hint(*status) {
                        narrative.push(hint.to_owned());
                    }
                } else {
                    narrative.push(format!("❌ Error: {error}"));
                }
                ApprovalReport::new(ApprovalOutcome::Failed(error), narrative)
            }
        }
    }
}

/// Operator hints attached to well-known review rejection codes.
const fn rejection_hint(status: u16) -> Option<&'static str> {
    match status {
        401 => Some("💡 Tip: Your GitHub token might be invalid or expired"),
        403 => Some("💡 Tip: Check if your GitHub token has 'repo' or 'public_repo' permissions"),
        422 => Some("💡 Tip: You might be trying to approve your own PR, which is not allowed"),
        _ => None,
    }
}
