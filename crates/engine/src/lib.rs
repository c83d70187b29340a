//! Report composition engine for Florestal.
//!
//! This crate contains pure report logic with ZERO web or database
//! dependencies. It consumes already-fetched record collections plus an
//! immutable [`request::ReportRequest`] and produces a finished, paginated
//! PDF artifact with a suggested file name.
//!
//! # Modules
//!
//! - `format` - Locale-aware display formatting (currency, date, decimal)
//! - `schema` - Declared field schemas per entity kind
//! - `request` - The immutable report configuration object
//! - `dataset` - Date-range/type filtering and sorting
//! - `aggregate` - Totals, subtotals, and per-unit ratio metrics
//! - `chart` - Off-thread chart rasterization to embeddable images
//! - `document` - Page layout, pagination, and PDF serialization
//! - `sequence` - The injectable payment-order number sequence
//! - `report` - The engine facade tying the pipeline together

pub mod aggregate;
pub mod chart;
pub mod dataset;
pub mod document;
pub mod format;
pub mod report;
pub mod request;
pub mod schema;
pub mod sequence;

pub use report::{ReportEngine, ReportError};
