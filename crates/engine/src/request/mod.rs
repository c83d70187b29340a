//! The immutable report configuration object.
//!
//! A `ReportRequest` is built by the calling UI layer and handed to the
//! engine; together with the raw records it is the engine's only input
//! contract.

pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::RequestError;
pub use types::{ReportRequest, TypeFilter};
