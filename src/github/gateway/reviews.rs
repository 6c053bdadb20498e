//! Octocrab implementation of the review gateway.

use async_trait::async_trait;
use serde_json::json;
use url::Url;

use crate::github::error::ApprovalError;
use crate::github::locator::PullRequestLocator;
use crate::github::models::{ApiPullRequest, ApiReview, PullRequestSnapshot};
use crate::github::token::AccessToken;

use super::ReviewGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{map_fetch_error, map_submit_error};

/// Octocrab-backed gateway submitting requests against a fixed API base.
pub struct OctocrabReviewGateway {
    api_base: Url,
}

impl OctocrabReviewGateway {
    /// Creates a gateway targeting the given API base URL.
    #[must_use]
    pub const fn new(api_base: Url) -> Self {
        Self { api_base }
    }
}

#[async_trait]
impl ReviewGateway for OctocrabReviewGateway {
    async fn pull_request(
        &self,
        locator: &PullRequestLocator,
        token: &AccessToken,
    ) -> Result<PullRequestSnapshot, ApprovalError> {
        let client = build_octocrab_client(token, self.api_base.as_str())?;

        client
            .get::<ApiPullRequest, _, _>(locator.pull_request_path(), None::<&()>)
            .await
            .map(ApiPullRequest::into)
            .map_err(|error| map_fetch_error(&error))
    }

    async fn submit_approval(
        &self,
        locator: &PullRequestLocator,
        token: &AccessToken,
        message: &str,
    ) -> Result<(), ApprovalError> {
        let client = build_octocrab_client(token, self.api_base.as_str())?;
        let payload = json!({ "event": "APPROVE", "body": message });

        client
            .post::<_, ApiReview>(locator.reviews_path(), Some(&payload))
            .await
            .map(|_review| ())
            .map_err(|error| map_submit_error(&error))
    }
}
