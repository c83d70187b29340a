//! Shared domain types.

pub mod id;
pub mod record;

#[cfg(test)]
mod record_tests;

pub use id::ReportId;
pub use record::{FieldValue, Record};
