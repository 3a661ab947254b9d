//! Per-model outcomes and the combined prediction.

use serde::Serialize;
use thiserror::Error;

use super::record::Feature;

/// Why a single model did not contribute to a request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error("unseen {feature} value '{value}'")]
    UnseenCategory { feature: Feature, value: String },

    #[error("pipeline expects a different value type for {0}")]
    FeatureType(Feature),

    #[error("non-finite prediction ({0})")]
    NonFinite(f64),

    #[error("{0}")]
    Internal(String),
}

/// Result of invoking one model on one record.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelOutcome {
    pub model: String,
    pub result: Result<f64, PredictError>,
}

impl ModelOutcome {
    pub fn success(model: impl Into<String>, value: f64) -> Self {
        Self {
            model: model.into(),
            result: Ok(value),
        }
    }

    pub fn failure(model: impl Into<String>, reason: PredictError) -> Self {
        Self {
            model: model.into(),
            result: Err(reason),
        }
    }
}

/// A successful model prediction and the weight it carried.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelPrediction {
    pub model: String,
    pub value: f64,
    /// Normalized weight in percent (0 when the model is unweighted).
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelFailure {
    pub model: String,
    pub reason: String,
}

/// Combined output of one ensemble request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    /// Successful models in registry order.
    pub per_model: Vec<ModelPrediction>,
    pub failures: Vec<ModelFailure>,
    pub simple_mean: f64,
    pub weighted_mean: f64,
    /// Sum of the weights (percent) that actually entered `weighted_mean`.
    ///
    /// Below 100 when a weighted model failed; the weighted sum is not rescaled.
    pub weight_coverage: f64,
}

impl PredictionResult {
    pub fn value_of(&self, model: &str) -> Option<f64> {
        self.per_model.iter().find(|p| p.model == model).map(|p| p.value)
    }

    pub fn is_degraded(&self) -> bool {
        !self.failures.is_empty()
    }
}
