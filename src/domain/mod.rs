//! Domain types used throughout the prediction pipeline.
//!
//! This module defines:
//!
//! - the request boundary shapes (`RawFeatures`, `LabeledFeatures`)
//! - the validated, code-encoded request (`FeatureRecord`) and its field names (`Feature`)
//! - per-model outcomes and the combined `PredictionResult`

pub mod prediction;
pub mod record;

pub use prediction::*;
pub use record::*;
