//! The payment-order number sequence.

pub mod error;
pub mod service;


pub use error::SequenceError;
pub use service::{AtomicOrderSequence, OrderSequence};
