//! Formatting error types.

use thiserror::Error;

/// Errors that can occur during display formatting.
///
/// Only contract violations surface as errors; bad data degrades to
/// sentinel values instead.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Truncation budget too small to hold an ellipsis.
    #[error("Truncation budget {0} is below the minimum of 4 characters")]
    BudgetTooSmall(usize),
}
