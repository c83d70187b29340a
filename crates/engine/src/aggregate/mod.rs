//! Totals, ratios, and group breakdowns over a filtered dataset.
//!
//! All arithmetic is `rust_decimal`; invalid or absent operands degrade to
//! zero rather than erroring, matching the display-side sentinel policy.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::{AggregateComputer, UNCATEGORIZED_LABEL};
pub use types::{AggregateMetric, MetricKind};
