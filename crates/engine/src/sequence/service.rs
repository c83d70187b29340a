//! Order sequence trait and the in-process implementation.

use std::sync::atomic::{AtomicU64, Ordering};

use super::error::SequenceError;

/// Monotonic source of payment-order numbers.
///
/// Injected into the engine so callers can back it with durable storage.
/// Implementations must never reuse or decrement a number, even when the
/// generated document is later discarded.
pub trait OrderSequence: Send + Sync {
    /// Claims and returns the next order number as one atomic step.
    ///
    /// # Errors
    ///
    /// `SequenceError::Backing` when the underlying store fails.
    fn next(&self) -> Result<u64, SequenceError>;
}

/// Process-wide in-memory sequence.
#[derive(Debug, Default)]
pub struct AtomicOrderSequence {
    last: AtomicU64,
}

impl AtomicOrderSequence {
    /// Creates a sequence whose next number is `last + 1`.
    #[must_use]
    pub fn starting_after(last: u64) -> Self {
        Self {
            last: AtomicU64::new(last),
        }
    }
}

impl OrderSequence for AtomicOrderSequence {
    fn next(&self) -> Result<u64, SequenceError> {
        Ok(self.last.fetch_add(1, Ordering::SeqCst) + 1)
    }
}
