//! GitHub pull request intake, token validation, and review submission.
//!
//! This module parses pull request URLs, validates access token syntax, and
//! wraps the two REST calls the approval engine needs behind a trait-based
//! gateway. Errors are mapped into user-facing variants so callers can
//! surface precise failures without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod token;

pub use error::ApprovalError;
pub use gateway::{OctocrabReviewGateway, ReviewGateway};
pub use locator::{PullRequestLocator, PullRequestNumber, RepositoryName, RepositoryOwner};
pub use models::{PullRequestSnapshot, PullRequestState};
pub use token::AccessToken;

#[cfg(test)]
pub use gateway::MockReviewGateway;

#[cfg(test)]
mod tests;
