//! Sequence error types.

use thiserror::Error;

/// Failures of the injected order-number sequence.
#[derive(Debug, Error)]
pub enum SequenceError {
    /// The backing store could not produce the next number.
    #[error("falha ao obter o próximo número de ordem: {0}")]
    Backing(String),
}
