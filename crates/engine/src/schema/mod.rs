//! Declared field schemas per entity kind.
//!
//! Each report flavor renders a subset of a declared schema instead of an
//! ad hoc set of boolean flags. Invalid field keys are rejected when the
//! request is validated, never silently rendered as blank columns.

pub mod types;


pub use types::{EntityKind, FieldClass, FieldSpec};
