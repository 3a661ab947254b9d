//! Ensemble prediction.
//!
//! Given one validated record:
//! 1. invoke every registered model; a model that fails is recorded, not fatal
//! 2. fail with `EnsembleError::Empty` if nothing succeeded
//! 3. `simple_mean` = arithmetic mean of the successful predictions
//! 4. `weighted_mean` = Σ value × weight/100 over successful models with a
//!    positive weight, falling back to `simple_mean` when there are none
//!
//! The weighted sum is deliberately not rescaled by the weight of the
//! survivors: when a weighted model drops out, `weighted_mean` shrinks with it.
//! `PredictionResult::weight_coverage` reports how much weight was present.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use rayon::prelude::*;
use thiserror::Error;

use crate::domain::{FeatureRecord, ModelFailure, ModelOutcome, ModelPrediction, PredictError, PredictionResult};
use crate::ensemble::weights::WeightTable;
use crate::models::{Model, ModelRegistry, RegistryError};

/// How models are invoked for one request. Results are identical either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Invocation {
    #[default]
    Parallel,
    Sequential,
}

#[derive(Debug, Error)]
pub enum EnsembleError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("no prediction available: none of the {} models produced a value", .failures.len())]
    Empty { failures: Vec<ModelFailure> },
}

/// Runs the registered models and combines their outputs.
pub struct EnsemblePredictor {
    registry: Arc<ModelRegistry>,
    weights: WeightTable,
    invocation: Invocation,
}

impl EnsemblePredictor {
    pub fn new(registry: Arc<ModelRegistry>, weights: WeightTable) -> Self {
        Self {
            registry,
            weights,
            invocation: Invocation::default(),
        }
    }

    pub fn with_invocation(mut self, invocation: Invocation) -> Self {
        self.invocation = invocation;
        self
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Predict one record. Loads the registry on first use.
    pub fn predict(&self, record: &FeatureRecord) -> Result<PredictionResult, EnsembleError> {
        let models = self.registry.load()?;
        let outcomes = invoke_all(models.as_slice(), record, self.invocation);
        aggregate(outcomes, &self.weights)
    }
}

/// Invoke each model once, in registry order. Never fails as a whole: an
/// error or a panic inside one model becomes that model's failure.
pub fn invoke_all(models: &[Model], record: &FeatureRecord, invocation: Invocation) -> Vec<ModelOutcome> {
    let invoke = |model: &Model| {
        let result = panic::catch_unwind(AssertUnwindSafe(|| model.predict(record)))
            .unwrap_or_else(|payload| Err(PredictError::Internal(panic_message(payload.as_ref()))));
        match result {
            Ok(value) => ModelOutcome::success(model.name(), value),
            Err(e) => {
                tracing::warn!(model = model.name(), error = %e, "model prediction failed");
                ModelOutcome::failure(model.name(), e)
            }
        }
    };

    match invocation {
        Invocation::Parallel => models.par_iter().map(invoke).collect(),
        Invocation::Sequential => models.iter().map(invoke).collect(),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown cause".to_string());
    format!("model panicked: {detail}")
}

/// Reduce per-model outcomes into a `PredictionResult`.
pub fn aggregate(outcomes: Vec<ModelOutcome>, weights: &WeightTable) -> Result<PredictionResult, EnsembleError> {
    let mut per_model = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();

    for outcome in outcomes {
        match outcome.result {
            Ok(value) => {
                let weight = weights.weight_of(&outcome.model);
                per_model.push(ModelPrediction {
                    model: outcome.model,
                    value,
                    weight,
                });
            }
            Err(reason) => failures.push(ModelFailure {
                model: outcome.model,
                reason: reason.to_string(),
            }),
        }
    }

    if per_model.is_empty() {
        return Err(EnsembleError::Empty { failures });
    }

    let simple_mean = per_model.iter().map(|p| p.value).sum::<f64>() / per_model.len() as f64;

    let mut weighted_sum = 0.0;
    let mut weight_coverage = 0.0;
    for p in per_model.iter().filter(|p| p.weight > 0.0) {
        weighted_sum += p.value * (p.weight / 100.0);
        weight_coverage += p.weight;
    }
    let weighted_mean = if weight_coverage > 0.0 { weighted_sum } else { simple_mean };

    tracing::debug!(
        succeeded = per_model.len(),
        failed = failures.len(),
        simple_mean,
        weighted_mean,
        weight_coverage,
        "aggregated ensemble"
    );

    Ok(PredictionResult {
        per_model,
        failures,
        simple_mean,
        weighted_mean,
        weight_coverage,
    })
}
