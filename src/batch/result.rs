//! Aggregate result of one batch call.

use super::request::RequestId;

/// Summary of one batch run, built incrementally as items complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    /// Correlation id assigned to the batch.
    pub request_id: RequestId,
    /// Number of items that survived the URL pre-filter.
    pub total: usize,
    /// Number of items whose outcome was approved.
    pub succeeded: usize,
    /// URLs whose outcome was not approved, in original input order.
    pub failed: Vec<String>,
    /// Operator-facing progress log for the whole batch.
    pub log: String,
}
