//! Batch correlation identifiers.

use std::fmt;

use uuid::Uuid;

/// Opaque eight-character correlation id shared by all events of one batch.
///
/// Generated fresh for every batch call and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// Generates a fresh identifier from a random UUID.
    #[must_use]
    pub fn generate() -> Self {
        let raw = Uuid::new_v4().simple().to_string();
        Self(raw.chars().take(8).collect())
    }

    /// Wraps a pre-existing identifier value.
    ///
    /// Intended for tests and deserialisation; production batches use
    /// [`RequestId::generate`] so identifiers stay unique per call.
    #[must_use]
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
