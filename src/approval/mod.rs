//! Per-pull-request approval flow and outcome classification.
//!
//! The [`ApprovalEngine`] drives one pull request through parse, token
//! validation, fetch, state check, and review submission, producing an
//! [`ApprovalOutcome`] together with the line-oriented progress narrative
//! operators rely on when a batch misbehaves.

mod engine;
mod outcome;

pub use engine::ApprovalEngine;
pub use outcome::{ApprovalOutcome, ApprovalReport};

#[cfg(test)]
mod tests;
