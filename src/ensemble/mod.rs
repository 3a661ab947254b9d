//! Ensemble orchestration.
//!
//! Responsibilities:
//!
//! - turn per-model quality scores into percentage weights (`weights`)
//! - invoke every registered model on one record, isolating failures (`predictor`)
//! - reduce the outcomes into a simple and a weighted mean (`predictor`)

pub mod predictor;
pub mod weights;

pub use predictor::*;
pub use weights::*;
