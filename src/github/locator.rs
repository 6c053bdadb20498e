//! URL parsing and identity wrappers for pull request intake.

use url::Url;

use super::error::ApprovalError;

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, ApprovalError> {
        if value.is_empty() {
            return Err(ApprovalError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, ApprovalError> {
        if value.is_empty() {
            return Err(ApprovalError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pull request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    pub(crate) const fn new(value: u64) -> Result<Self, ApprovalError> {
        if value == 0 {
            return Err(ApprovalError::InvalidPullRequestNumber);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Parsed pull request URL.
///
/// Only public `github.com` pull request URLs are accepted; the API base for
/// requests is configured separately on the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLocator {
    owner: RepositoryOwner,
    repository: RepositoryName,
    number: PullRequestNumber,
}

impl PullRequestLocator {
    /// Parses a GitHub pull request URL in the form
    /// `https://github.com/<owner>/<repo>/pull/<number>`, optionally followed
    /// by a trailing `/files` segment.
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalError::InvalidUrl`] when parsing fails or the URL is
    /// not an `https://github.com` URL, [`ApprovalError::MissingPathSegments`]
    /// when the path is not `/owner/repo/pull/<number>`, and
    /// [`ApprovalError::InvalidPullRequestNumber`] when the number segment is
    /// not a positive integer.
    ///
    /// # Example
    ///
    /// ```
    /// use greenlight::github::PullRequestLocator;
    ///
    /// let locator = PullRequestLocator::parse("https://github.com/acme/widgets/pull/42")
    ///     .expect("should parse pull request URL");
    /// assert_eq!(locator.owner().as_str(), "acme");
    /// assert_eq!(locator.repository().as_str(), "widgets");
    /// assert_eq!(locator.number().get(), 42);
    /// ```
    pub fn parse(input: &str) -> Result<Self, ApprovalError> {
        let parsed =
            Url::parse(input).map_err(|error| ApprovalError::InvalidUrl(error.to_string()))?;

        if parsed.scheme() != "https" {
            return Err(ApprovalError::InvalidUrl(
                "pull request URL must use https".to_owned(),
            ));
        }

        if parsed.host_str() != Some("github.com") {
            return Err(ApprovalError::InvalidUrl(
                "pull request URL must point at github.com".to_owned(),
            ));
        }

        let mut segments = parsed
            .path_segments()
            .ok_or(ApprovalError::MissingPathSegments)?;

        let owner_segment = segments.next().ok_or(ApprovalError::MissingPathSegments)?;
        let repository_segment = segments.next().ok_or(ApprovalError::MissingPathSegments)?;
        let marker = segments.next().ok_or(ApprovalError::MissingPathSegments)?;
        let number_segment = segments.next().ok_or(ApprovalError::MissingPathSegments)?;

        if marker != "pull" {
            return Err(ApprovalError::MissingPathSegments);
        }

        if number_segment.is_empty() {
            return Err(ApprovalError::MissingPathSegments);
        }

        // A trailing `/files` segment (the PR diff tab) is tolerated; anything
        // else after the number is rejected.
        match segments.next() {
            None => {}
            Some("files") | Some("") => {
                if segments.next().is_some() {
                    return Err(ApprovalError::MissingPathSegments);
                }
            }
            Some(_) => return Err(ApprovalError::MissingPathSegments),
        }

        if !number_segment.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(ApprovalError::InvalidPullRequestNumber);
        }

        let owner = RepositoryOwner::new(owner_segment)?;
        let repository = RepositoryName::new(repository_segment)?;
        let number = number_segment
            .parse::<u64>()
            .map_err(|_| ApprovalError::InvalidPullRequestNumber)
            .and_then(PullRequestNumber::new)?;

        Ok(Self {
            owner,
            repository,
            number,
        })
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Pull request number.
    #[must_use]
    pub const fn number(&self) -> PullRequestNumber {
        self.number
    }

    /// Short `owner/repo#number` form used in progress narratives.
    #[must_use]
    pub fn reference(&self) -> String {
        format!(
            "{}/{}#{}",
            self.owner.as_str(),
            self.repository.as_str(),
            self.number.get()
        )
    }

    pub(crate) fn pull_request_path(&self) -> String {
        format!(
            "/repos/{}/{}/pulls/{}",
            self.owner.as_str(),
            self.repository.as_str(),
            self.number.get()
        )
    }

    pub(crate) fn reviews_path(&self) -> String {
        format!(
            "/repos/{}/{}/pulls/{}/reviews",
            self.owner.as_str(),
            self.repository.as_str(),
            self.number.get()
        )
    }
}
