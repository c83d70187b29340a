//! Locale-aware display formatting.
//!
//! Every report module renders raw field values through this one formatter
//! so that currency, date, and decimal conventions cannot drift between
//! report flavors. Bad data never fails here: non-numeric input formats as
//! the zero amount, unparseable dates as the `"N/A"` sentinel.

pub mod error;
pub mod service;

#[cfg(test)]
mod tests;

pub use error::FormatError;
pub use service::{Formatter, FormatterConfig};
