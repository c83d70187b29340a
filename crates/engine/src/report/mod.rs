//! The engine façade: validate, filter, aggregate, render, assemble.

pub mod error;
pub mod service;


pub use error::ReportError;
pub use service::ReportEngine;
