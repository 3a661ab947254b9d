//! Shared start-up and request logic used by every command.
//!
//! Start-up builds the catalog, the weight table and the registry, and loads
//! the models eagerly so that fatal errors surface before any request is
//! served. A request is then: validate -> predict.

use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::CategoryCatalog;
use crate::config::PredictorConfig;
use crate::domain::{FeatureRecord, PredictionResult, RawFeatures};
use crate::ensemble::{Invocation, EnsemblePredictor, WeightTable};
use crate::error::AppError;
use crate::models::{FsModelStore, ModelRegistry};

/// A ready-to-serve predictor.
pub struct Engine {
    pub catalog: CategoryCatalog,
    pub predictor: EnsemblePredictor,
}

impl Engine {
    /// Bring up every component; any failure here is fatal.
    pub fn start(config: &PredictorConfig) -> Result<Self, AppError> {
        let catalog = CategoryCatalog::standard()?;
        let weights = WeightTable::from_scores(config.quality_scores.iter().cloned())?;

        let store = FsModelStore::new(&config.models_dir);
        let registry = Arc::new(ModelRegistry::new(store, config.model_names()));
        registry.load()?;

        let predictor = EnsemblePredictor::new(registry, weights).with_invocation(config.invocation);
        Ok(Self { catalog, predictor })
    }

    /// Validate one request and run the ensemble on it.
    pub fn predict(&self, raw: RawFeatures) -> Result<(FeatureRecord, PredictionResult), AppError> {
        let record = FeatureRecord::validate(raw, &self.catalog)?;
        let result = self.predictor.predict(&record)?;
        Ok((record, result))
    }
}

/// Resolve configuration from the environment plus command-line overrides.
pub fn resolve_config(models_dir: Option<PathBuf>, sequential: bool) -> PredictorConfig {
    let mut config = PredictorConfig::from_env();
    if let Some(dir) = models_dir {
        config.models_dir = dir;
    }
    if sequential {
        config.invocation = Invocation::Sequential;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::tempdir;

    use crate::error::{EXIT_INPUT, EXIT_STARTUP};

    fn write_constant(dir: &std::path::Path, name: &str, value: f64) {
        let json = format!(r#"{{ "name": "{name}", "kind": "linear", "intercept": {value:.1} }}"#);
        fs::write(dir.join(crate::models::artifact_file_name(name)), json).unwrap();
    }

    fn config(dir: &std::path::Path) -> PredictorConfig {
        PredictorConfig {
            models_dir: dir.to_path_buf(),
            ..PredictorConfig::default()
        }
    }

    #[test]
    fn engine_predicts_from_artifacts() {
        let dir = tempdir().unwrap();
        write_constant(dir.path(), "Linear Regression", 100_000.0);
        write_constant(dir.path(), "Random Forest", 110_000.0);
        write_constant(dir.path(), "CatBoost", 120_000.0);

        let engine = Engine::start(&config(dir.path())).unwrap();
        let (record, result) = engine.predict(RawFeatures::default()).unwrap();
        assert_eq!(record.job_title(), "Data Scientist");
        assert!((result.simple_mean - 110_000.0).abs() < 1e-6);
        assert!((result.weighted_mean - 112_500.0).abs() < 1e-6);
    }

    #[test]
    fn missing_artifact_stops_start_up() {
        let dir = tempdir().unwrap();
        write_constant(dir.path(), "Linear Regression", 1.0);
        write_constant(dir.path(), "CatBoost", 1.0);

        let err = Engine::start(&config(dir.path())).err().unwrap();
        assert_eq!(err.exit_code(), EXIT_STARTUP);
        assert!(err.to_string().contains("Random Forest"), "{err}");
    }

    #[test]
    fn invalid_request_is_an_input_error() {
        let dir = tempdir().unwrap();
        write_constant(dir.path(), "Linear Regression", 1.0);
        write_constant(dir.path(), "Random Forest", 1.0);
        write_constant(dir.path(), "CatBoost", 1.0);

        let engine = Engine::start(&config(dir.path())).unwrap();
        let raw = RawFeatures {
            salary_currency: "XXX".to_string(),
            ..RawFeatures::default()
        };
        let err = engine.predict(raw).err().unwrap();
        assert_eq!(err.exit_code(), EXIT_INPUT);
    }
}
