//! Chart rendering error types.

use std::time::Duration;

use thiserror::Error;

/// Failures of a single chart render; isolated per panel by the caller.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The draw pass itself reported an error.
    #[error("falha ao desenhar o gráfico: {0}")]
    Draw(String),

    /// The worker did not signal completion within the deadline.
    #[error("tempo esgotado ao desenhar o gráfico ({0:?})")]
    DeadlineExceeded(Duration),

    /// The worker thread terminated without sending a result.
    #[error("o desenhista do gráfico encerrou sem responder")]
    WorkerGone,

    /// Zero-sized raster target.
    #[error("dimensões inválidas para o gráfico: {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}
