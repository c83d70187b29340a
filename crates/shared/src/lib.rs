//! Shared types and errors for Florestal.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - The loosely-typed `Record` model consumed by the report engine
//! - Application-wide error types

pub mod error;
pub mod types;

pub use error::{AppError, AppResult};
pub use types::id::ReportId;
pub use types::record::{FieldValue, Record};
