//! Input/output helpers.
//!
//! - batch CSV ingest + prediction (`batch`)
//! - batch result export to CSV (`export`)

pub mod batch;
pub mod export;

pub use batch::*;
pub use export::*;
