//! Static credential store loaded once at startup.
//!
//! The store is a JSON document keeping the original deployment shape:
//! `{"Tokens": [{"DisplayName": "…", "AccessToken": "…"}]}`. It is read-only
//! for the lifetime of the process; the batch runner only ever borrows it.

use std::fmt;

use serde::Deserialize;

use crate::github::error::ApprovalError;

/// A named GitHub access token configured for the approving operator.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Credential {
    display_name: String,
    access_token: String,
}

impl Credential {
    /// Creates a credential from its parts.
    #[must_use]
    pub fn new(display_name: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            access_token: access_token.into(),
        }
    }

    /// Display name shown to operators and written to the audit trail.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Raw access token; consumed by the gateway, never logged.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Credential")
            .field("display_name", &self.display_name)
            .field("access_token", &"***")
            .finish()
    }
}

/// Immutable set of configured credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CredentialSet {
    #[serde(rename = "Tokens", default)]
    credentials: Vec<Credential>,
}

impl CredentialSet {
    /// Wraps a list of credentials.
    #[must_use]
    pub const fn new(credentials: Vec<Credential>) -> Self {
        Self { credentials }
    }

    /// Parses the JSON credential store document.
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalError::Configuration`] when the document is not
    /// valid JSON or does not match the expected shape.
    pub fn from_json(text: &str) -> Result<Self, ApprovalError> {
        serde_json::from_str(text).map_err(|error| ApprovalError::Configuration {
            message: format!("invalid credential store: {error}"),
        })
    }

    /// Looks a credential up by its display name.
    #[must_use]
    pub fn find(&self, display_name: &str) -> Option<&Credential> {
        self.credentials
            .iter()
            .find(|credential| credential.display_name() == display_name)
    }

    /// Number of configured credentials.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.credentials.len()
    }

    /// Whether the store holds no credentials.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}
