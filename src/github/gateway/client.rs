//! Octocrab client construction for gateway implementations.

use std::time::Duration;

use http::Uri;
use http::header::{ACCEPT, HeaderName, USER_AGENT};
use octocrab::Octocrab;

use crate::github::error::ApprovalError;
use crate::github::token::AccessToken;

use super::error_mapping::map_octocrab_error;

/// API version pinned on every request.
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Bounded timeout applied to connect, read, and write.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Identifying client tag sent as the user agent.
const CLIENT_TAG: &str = concat!("greenlight/", env!("CARGO_PKG_VERSION"));

const API_VERSION_HEADER: HeaderName = HeaderName::from_static("x-github-api-version");

/// Builds an Octocrab client for the given token and API base URL.
///
/// A fresh client is built per request so each call authenticates with the
/// credential chosen for the batch. Every client pins the API version,
/// accepts GitHub JSON, identifies itself, and carries bounded timeouts.
///
/// # Errors
///
/// Returns [`ApprovalError::InvalidUrl`] when the base URI cannot be parsed
/// or [`ApprovalError::Configuration`] when Octocrab fails to construct a
/// client.
pub(super) fn build_octocrab_client(
    token: &AccessToken,
    api_base: &str,
) -> Result<Octocrab, ApprovalError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| ApprovalError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| ApprovalError::Configuration {
            message: format!("build client failed: {error}"),
        })?
        .add_header(ACCEPT, "application/vnd.github+json".to_owned())
        .add_header(USER_AGENT, CLIENT_TAG.to_owned())
        .add_header(API_VERSION_HEADER, GITHUB_API_VERSION.to_owned())
        .set_connect_timeout(Some(REQUEST_TIMEOUT))
        .set_read_timeout(Some(REQUEST_TIMEOUT))
        .set_write_timeout(Some(REQUEST_TIMEOUT))
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
