//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.greenlight.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `GREENLIGHT_CREDENTIAL`,
//!    `GREENLIGHT_URLS_FILE`, and friends
//! 4. **Command-line arguments** – `--credential`/`-c`, `--urls-file`/`-f`
//!
//! The credential store itself lives in a separate JSON file (see
//! [`credentials`]) so that tokens stay out of the layered configuration.

mod credentials;

pub use credentials::{Credential, CredentialSet};

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::github::error::ApprovalError;

/// Review message submitted with every approval unless overridden.
pub const DEFAULT_APPROVAL_MESSAGE: &str = "Approved by léng zái.";

/// Directory receiving per-day audit log partitions unless overridden.
pub const DEFAULT_AUDIT_LOG_DIR: &str = "Logs/Audit";

const DEFAULT_CREDENTIALS_FILE: &str = "credentials.json";
const DEFAULT_OPERATOR: &str = "operator";
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `GREENLIGHT_CREDENTIAL` or `--credential`: credential display name
/// - `GREENLIGHT_URLS_FILE` or `--urls-file`: file holding PR URLs, one per
///   line (stdin when unset)
/// - `GREENLIGHT_CREDENTIALS_FILE` or `--credentials-file`: credential store
/// - `GREENLIGHT_APPROVAL_MESSAGE` or `--approval-message`: review body
/// - `GREENLIGHT_AUDIT_LOG_DIR` or `--audit-log-dir`: audit partition root
/// - `GREENLIGHT_OPERATOR` or `--operator`: actor recorded in the audit trail
/// - `GREENLIGHT_API_BASE` or `--api-base`: GitHub API base URL override
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GREENLIGHT",
    discovery(
        dotfile_name = ".greenlight.toml",
        config_file_name = "greenlight.toml",
        app_name = "greenlight"
    )
)]
pub struct GreenlightConfig {
    /// Display name of the credential to approve with.
    ///
    /// Can be provided via:
    /// - CLI: `--credential <NAME>` or `-c <NAME>`
    /// - Environment: `GREENLIGHT_CREDENTIAL`
    /// - Config file: `credential = "..."`
    #[ortho_config(cli_short = 'c')]
    pub credential: Option<String>,

    /// File containing pull request URLs, one per line.
    ///
    /// When unset the URL blob is read from standard input.
    #[ortho_config(cli_short = 'f')]
    pub urls_file: Option<String>,

    /// Path of the JSON credential store.
    ///
    /// Defaults to `credentials.json` in the working directory.
    #[ortho_config()]
    pub credentials_file: Option<String>,

    /// Review message submitted with each approval.
    #[ortho_config()]
    pub approval_message: Option<String>,

    /// Directory receiving per-day audit log partitions.
    #[ortho_config()]
    pub audit_log_dir: Option<String>,

    /// Operator name recorded as the actor in audit events.
    #[ortho_config()]
    pub operator: Option<String>,

    /// GitHub API base URL override, mainly for tests and proxies.
    #[ortho_config()]
    pub api_base: Option<String>,
}

impl GreenlightConfig {
    /// Returns the selected credential display name.
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalError::NoCredentialSelected`] when no credential
    /// display name was provided by any configuration layer.
    pub fn require_credential(&self) -> Result<&str, ApprovalError> {
        self.credential
            .as_deref()
            .ok_or(ApprovalError::NoCredentialSelected)
    }

    /// Review message submitted with each approval.
    #[must_use]
    pub fn approval_message(&self) -> &str {
        self.approval_message
            .as_deref()
            .unwrap_or(DEFAULT_APPROVAL_MESSAGE)
    }

    /// Audit log directory, defaulting to `Logs/Audit`.
    #[must_use]
    pub fn audit_log_dir(&self) -> Utf8PathBuf {
        self.audit_log_dir
            .as_deref()
            .map_or_else(|| Utf8PathBuf::from(DEFAULT_AUDIT_LOG_DIR), Utf8PathBuf::from)
    }

    /// Operator name recorded in audit events.
    #[must_use]
    pub fn operator(&self) -> &str {
        self.operator.as_deref().unwrap_or(DEFAULT_OPERATOR)
    }

    /// Resolved GitHub API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalError::Configuration`] when the configured base URL
    /// cannot be parsed.
    pub fn api_base(&self) -> Result<Url, ApprovalError> {
        let raw = self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE);
        Url::parse(raw).map_err(|error| ApprovalError::Configuration {
            message: format!("invalid API base URL '{raw}': {error}"),
        })
    }

    /// Loads the JSON credential store from the configured path.
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalError::Configuration`] when the file cannot be read
    /// or does not parse as a credential store document.
    pub fn load_credentials(&self) -> Result<CredentialSet, ApprovalError> {
        let path = self
            .credentials_file
            .as_deref()
            .unwrap_or(DEFAULT_CREDENTIALS_FILE);
        let text = std::fs::read_to_string(path).map_err(|error| ApprovalError::Configuration {
            message: format!("failed to read credential store '{path}': {error}"),
        })?;
        CredentialSet::from_json(&text)
    }
}
