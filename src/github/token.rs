//! Access token wrapper and syntactic pre-validation.
//!
//! Validation here is a surface check only: it confirms the token *looks*
//! like a GitHub token before any network call. Actual authority is proven
//! only by a successful API call.

use std::fmt;

use super::error::ApprovalError;

/// Prefixes of the known GitHub token families.
const KNOWN_PREFIXES: [&str; 6] = ["github_pat_", "ghp_", "gho_", "ghu_", "ghs_", "ghr_"];

/// Minimum plausible token length.
const MIN_TOKEN_LENGTH: usize = 10;

/// Access token wrapper enforcing surface syntax.
///
/// The wrapped value is deliberately excluded from `Debug` output so tokens
/// never leak into logs or panic messages.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Validates the token's surface syntax and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalError::InvalidTokenFormat`] when the supplied string
    /// is shorter than ten characters or does not start with a known GitHub
    /// token family prefix.
    ///
    /// # Example
    ///
    /// ```
    /// use greenlight::github::AccessToken;
    ///
    /// assert!(AccessToken::new("ghp_abcdefghij").is_ok());
    /// assert!(AccessToken::new("short").is_err());
    /// ```
    pub fn new(token: impl Into<String>) -> Result<Self, ApprovalError> {
        let value = token.into();
        if Self::is_valid_format(&value) {
            Ok(Self(value))
        } else {
            Err(ApprovalError::InvalidTokenFormat)
        }
    }

    /// Reports whether a raw string looks like a GitHub token.
    #[must_use]
    pub fn is_valid_format(token: &str) -> bool {
        token.len() >= MIN_TOKEN_LENGTH
            && KNOWN_PREFIXES
                .iter()
                .any(|prefix| token.starts_with(prefix))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("AccessToken(***)")
    }
}
