//! Off-thread chart rasterization for embedding into documents.
//!
//! The draw pass runs on a worker thread with a bitmap backend; the caller
//! waits a bounded time for the draw-complete message. A chart that fails
//! or misses the deadline is skipped by the assembler, never fatal.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ChartError;
pub use service::ChartRenderer;
pub use types::{BarOrientation, ChartKind, ChartPanel, ChartSeries, RasterImage, SeriesEntry};
