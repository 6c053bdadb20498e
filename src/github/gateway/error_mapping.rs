//! Error mapping helpers for the Octocrab gateway implementation.

use crate::github::error::ApprovalError;

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Maps errors outside the fetch/submit paths, such as client construction.
pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> ApprovalError {
    if is_network_error(error) {
        return ApprovalError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    ApprovalError::Configuration {
        message: format!("{operation} failed: {error}"),
    }
}

/// Maps a pull request fetch failure.
///
/// A 404 and any other non-2xx response collapse into
/// [`ApprovalError::PullRequestNotFound`]; only transport failures are
/// reported as network errors.
pub(super) fn map_fetch_error(error: &octocrab::Error) -> ApprovalError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return ApprovalError::PullRequestNotFound {
            message: format!(
                "GitHub returned {status}: {message}",
                status = source.status_code,
                message = source.message
            ),
        };
    }

    if is_network_error(error) {
        return ApprovalError::Network {
            message: format!("fetch pull request failed: {error}"),
        };
    }

    ApprovalError::PullRequestNotFound {
        message: format!("fetch pull request failed: {error}"),
    }
}

/// Maps an approval submission failure, carrying the status and body text
/// GitHub returned for diagnostics.
pub(super) fn map_submit_error(error: &octocrab::Error) -> ApprovalError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return ApprovalError::ApprovalRejected {
            status: source.status_code.as_u16(),
            body: source.message.clone(),
        };
    }

    ApprovalError::Network {
        message: format!("submit approval failed: {error}"),
    }
}
