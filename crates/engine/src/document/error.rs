//! Document assembly error types.

use thiserror::Error;

use crate::format::FormatError;
use crate::request::RequestError;

/// Failures while assembling the PDF document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The request failed validation before any layout work.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// A layout-side formatting contract was violated.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The PDF backend reported an error (fonts, image embedding, save).
    #[error("falha ao gerar o PDF: {0}")]
    Pdf(String),
}
