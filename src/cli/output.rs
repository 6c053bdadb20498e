//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use greenlight::{ApprovalError, BatchResult};

/// Writes the batch progress log to stdout.
///
/// # Errors
///
/// Returns [`ApprovalError::Io`] when stdout cannot be written.
pub fn write_batch_log(result: &BatchResult) -> Result<(), ApprovalError> {
    let mut stdout = io::stdout().lock();
    write_batch_log_to(&mut stdout, result)
}

/// Writes the batch progress log to the given writer.
///
/// # Errors
///
/// Returns [`ApprovalError::Io`] when the writer fails.
pub fn write_batch_log_to<W: Write>(
    writer: &mut W,
    result: &BatchResult,
) -> Result<(), ApprovalError> {
    writeln!(writer, "{}", result.log).map_err(|error| ApprovalError::Io {
        message: error.to_string(),
    })
}
