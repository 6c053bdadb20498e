//! Greenlight library crate providing batch GitHub pull request approval.
//!
//! The library parses pull request URLs, validates access token syntax,
//! verifies each pull request is open, submits APPROVE reviews through the
//! GitHub REST API, and records an append-only audit trail of every batch.
//! Errors are mapped into user-facing variants so the CLI can surface precise
//! failures without exposing HTTP internals.

pub mod approval;
pub mod audit;
pub mod batch;
pub mod config;
pub mod github;
pub mod telemetry;

pub use approval::{ApprovalEngine, ApprovalOutcome, ApprovalReport};
pub use audit::{AuditEvent, AuditLogger, FileAuditLogger};
pub use batch::{BatchResult, BatchRunner, RequestId};
pub use config::{Credential, CredentialSet, GreenlightConfig};
pub use github::{
    AccessToken, ApprovalError, OctocrabReviewGateway, PullRequestLocator, ReviewGateway,
};
