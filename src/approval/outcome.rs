//! Outcome classification for a single approval attempt.

use crate::github::error::ApprovalError;

/// Terminal outcome of one pull request's approval flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalOutcome {
    /// The approval review was submitted successfully.
    Approved,
    /// The pull request exists but is not open.
    Rejected {
        /// Literal state value reported by GitHub.
        state: String,
    },
    /// A terminal failure occurred before or during submission.
    Failed(ApprovalError),
}

impl ApprovalOutcome {
    /// Whether the pull request was approved.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }

    /// Human-readable failure description, `None` when approved.
    #[must_use]
    pub fn failure_message(&self) -> Option<String> {
        match self {
            Self::Approved => None,
            Self::Rejected { state } => Some(
                ApprovalError::WrongState {
                    state: state.clone(),
                }
                .to_string(),
            ),
            Self::Failed(error) => Some(error.to_string()),
        }
    }
}

/// Outcome of one approval attempt together with its progress narrative.
///
/// The narrative is the operator-facing artifact; the batch runner appends it
/// to the running log verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalReport {
    /// Terminal outcome for the pull request.
    pub outcome: ApprovalOutcome,
    /// Ordered progress lines emitted while processing the pull request.
    pub narrative: Vec<String>,
}

impl ApprovalReport {
    /// Bundles an outcome with its narrative.
    #[must_use]
    pub const fn new(outcome: ApprovalOutcome, narrative: Vec<String>) -> Self {
        Self { outcome, narrative }
    }
}
