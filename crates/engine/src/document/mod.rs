//! PDF document assembly.
//!
//! Turns a filtered dataset plus precomputed aggregates and chart panels
//! into a finished, paginated PDF artifact with a suggested file name.

pub mod error;
pub mod layout;
pub mod service;
pub mod types;


pub use error::DocumentError;
pub use service::DocumentAssembler;
pub use types::{AssemblerOptions, PaymentOrderContext, ReportArtifact};
