//! Error types exposed by the batch approval engine.

use thiserror::Error;

/// Errors surfaced while parsing input or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApprovalError {
    /// The provided URL could not be parsed.
    #[error("pull request URL is invalid: {0}")]
    InvalidUrl(String),

    /// The pull request path is incomplete.
    #[error("pull request URL must match https://github.com/owner/repo/pull/<number>")]
    MissingPathSegments,

    /// The pull request number is not a valid integer.
    #[error("pull request number must be a positive integer")]
    InvalidPullRequestNumber,

    /// The token does not look like any known GitHub token family.
    #[error("token does not match a known GitHub token format")]
    InvalidTokenFormat,

    /// The pull request is missing or the token cannot see it.
    ///
    /// A 404 and an access-denied response collapse into this one variant so
    /// callers cannot distinguish a private repository from a missing one.
    #[error("pull request not found or access denied: {message}")]
    PullRequestNotFound {
        /// Status detail from the failed fetch.
        message: String,
    },

    /// The pull request is not open.
    #[error("cannot approve a {state} pull request")]
    WrongState {
        /// Literal state value reported by GitHub.
        state: String,
    },

    /// GitHub rejected the approval submission.
    #[error("approval rejected with status {status}: {body}")]
    ApprovalRejected {
        /// HTTP status code returned by GitHub.
        status: u16,
        /// Response body text for diagnostics.
        body: String,
    },

    /// No configured credential matches the requested display name.
    #[error("no valid GitHub access token selected")]
    NoCredentialSelected,

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
