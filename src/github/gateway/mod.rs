//! Gateways for fetching pull requests and submitting approval reviews.
//!
//! This module provides a trait-based gateway for the two GitHub API calls
//! the approval engine needs. The trait-based design enables mocking in tests
//! while the Octocrab implementation handles real HTTP requests.

mod client;
mod error_mapping;
mod reviews;

pub use reviews::OctocrabReviewGateway;

use async_trait::async_trait;

use crate::github::error::ApprovalError;
use crate::github::locator::PullRequestLocator;
use crate::github::models::PullRequestSnapshot;
use crate::github::token::AccessToken;

/// Gateway that can fetch pull request state and submit approval reviews.
///
/// Both operations take the token per call; implementations authenticate each
/// request with it and must never retry on failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Fetch the pull request snapshot used for state checking.
    async fn pull_request(
        &self,
        locator: &PullRequestLocator,
        token: &AccessToken,
    ) -> Result<PullRequestSnapshot, ApprovalError>;

    /// Submit an APPROVE review carrying the given message.
    async fn submit_approval(
        &self,
        locator: &PullRequestLocator,
        token: &AccessToken,
        message: &str,
    ) -> Result<(), ApprovalError>;
}
