//! Batch orchestration over a list of pull request URLs.
//!
//! The [`BatchRunner`] drives each URL through the approval engine strictly
//! sequentially, accumulates per-item outcomes into a [`BatchResult`], and
//! emits one audit event per logical step under a fresh [`RequestId`].

mod request;
mod result;
mod runner;

pub use request::RequestId;
pub use result::BatchResult;
pub use runner::BatchRunner;
