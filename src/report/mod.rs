//! Reporting utilities: formatted terminal output for predictions, weights,
//! catalog listings and batch runs.
//!
//! Formatting lives here so the prediction core never deals with currency
//! formatting or layout.

pub mod format;

pub use format::*;
