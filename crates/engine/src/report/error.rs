//! Engine-level error taxonomy.
//!
//! Configuration problems fail fast, data problems degrade to sentinels
//! upstream, chart problems degrade to omitted panels; whatever remains
//! surfaces here as `Internal`.

use thiserror::Error;

use crate::document::DocumentError;
use crate::request::RequestError;
use crate::sequence::SequenceError;

/// Failures of a whole report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The request was rejected before any work started.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The injected order sequence failed.
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    /// Anything unexpected; aborts the call.
    #[error("erro interno ao gerar o relatório: {0}")]
    Internal(String),
}

impl From<DocumentError> for ReportError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::Request(e) => Self::Request(e),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<ReportError> for florestal_shared::AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Request(e) => Self::Validation(e.to_string()),
            ReportError::Sequence(e) => Self::BusinessRule(e.to_string()),
            ReportError::Internal(message) => Self::Internal(message),
        }
    }
}
