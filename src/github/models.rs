//! Data models representing pull request snapshots.

use std::fmt;

use serde::Deserialize;

/// Lifecycle state reported by GitHub for a pull request.
///
/// Upstream reports the state as a bare string; values not yet known to this
/// crate are preserved verbatim in [`PullRequestState::Other`] rather than
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullRequestState {
    /// The pull request is open and can be reviewed.
    Open,
    /// The pull request has been closed (merged or not).
    Closed,
    /// Any state string this crate does not recognise.
    Other(String),
}

impl PullRequestState {
    /// Parses the raw state string from the API.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "open" => Self::Open,
            "closed" => Self::Closed,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Returns the literal state value as reported by GitHub.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// Whether the pull request is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for PullRequestState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Minimal pull request snapshot used for state checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSnapshot {
    /// Lifecycle state (open, closed, or unknown).
    pub state: PullRequestState,
    /// Title of the pull request.
    pub title: Option<String>,
    /// Author login if present.
    pub author: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequest {
    pub(super) state: Option<String>,
    pub(super) title: Option<String>,
    pub(super) user: Option<ApiUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) login: Option<String>,
}

/// Review resource returned when an approval is submitted. Only consumed to
/// confirm the response deserialises; the engine does not use the fields.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiReview {
    #[serde(rename = "id")]
    pub(super) _id: Option<u64>,
    #[serde(rename = "state")]
    pub(super) _state: Option<String>,
}

impl From<ApiPullRequest> for PullRequestSnapshot {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            state: value.state.map_or_else(
                || PullRequestState::Other("unknown".to_owned()),
                |raw| PullRequestState::parse(&raw),
            ),
            title: value.title,
            author: value.user.and_then(|user| user.login),
        }
    }
}

/// Test helpers for constructing [`PullRequestSnapshot`] fixtures.
#[cfg(test)]
pub mod test_support {
    use super::{PullRequestSnapshot, PullRequestState};

    /// Constructs an open pull request snapshot with a title and author.
    #[must_use]
    pub fn open_snapshot(title: &str, author: &str) -> PullRequestSnapshot {
        PullRequestSnapshot {
            state: PullRequestState::Open,
            title: Some(title.to_owned()),
            author: Some(author.to_owned()),
        }
    }

    /// Constructs a snapshot in the given raw state with a default title.
    #[must_use]
    pub fn snapshot_in_state(raw_state: &str) -> PullRequestSnapshot {
        PullRequestSnapshot {
            state: PullRequestState::parse(raw_state),
            title: Some("Example change".to_owned()),
            author: Some("octocat".to_owned()),
        }
    }
}
