//! Date-range and categorical filtering plus class-aware sorting.
//!
//! Produces the `FilteredDataset` that every downstream component (totals,
//! charts, table layout) consumes, so filtering happens exactly once per
//! report.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::DatasetFilter;
pub use types::FilteredDataset;
