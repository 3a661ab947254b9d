//! The `Model` handle and the ordered set the registry hands out.

use std::fmt;
use std::sync::Arc;

use crate::domain::{FeatureRecord, PredictError};

/// A trained prediction pipeline: record in, salary estimate out.
///
/// Implementations own their preprocessing (categorical encoding etc.) and
/// must be safe to call from several threads at once.
pub trait Pipeline: Send + Sync {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictError>;
}

/// A named pipeline. Cheap to clone; immutable after load.
#[derive(Clone)]
pub struct Model {
    name: String,
    pipeline: Arc<dyn Pipeline>,
}

impl Model {
    pub fn new(name: impl Into<String>, pipeline: impl Pipeline + 'static) -> Self {
        Self {
            name: name.into(),
            pipeline: Arc::new(pipeline),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the pipeline. A non-finite output counts as a failure.
    pub fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictError> {
        let value = self.pipeline.predict(record)?;
        if !value.is_finite() {
            return Err(PredictError::NonFinite(value));
        }
        Ok(value)
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model").field("name", &self.name).finish()
    }
}

/// The loaded models, in the order they were requested.
#[derive(Debug, Clone, Default)]
pub struct ModelSet {
    models: Vec<Model>,
}

impl ModelSet {
    pub fn new(models: Vec<Model>) -> Self {
        Self { models }
    }

    pub fn get(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name() == name)
    }

    pub fn as_slice(&self) -> &[Model] {
        &self.models
    }

    pub fn names(&self) -> Vec<&str> {
        self.models.iter().map(Model::name).collect()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryCatalog;
    use crate::domain::RawFeatures;

    struct Fixed(f64);

    impl Pipeline for Fixed {
        fn predict(&self, _record: &FeatureRecord) -> Result<f64, PredictError> {
            Ok(self.0)
        }
    }

    fn record() -> FeatureRecord {
        FeatureRecord::validate(RawFeatures::default(), &CategoryCatalog::standard().unwrap()).unwrap()
    }

    #[test]
    fn non_finite_output_is_a_failure() {
        let model = Model::new("nan", Fixed(f64::NAN));
        assert!(matches!(model.predict(&record()), Err(PredictError::NonFinite(_))));

        let model = Model::new("ok", Fixed(42.0));
        assert_eq!(model.predict(&record()), Ok(42.0));
    }

    #[test]
    fn set_lookup_by_name() {
        let set = ModelSet::new(vec![Model::new("A", Fixed(1.0)), Model::new("B", Fixed(2.0))]);
        assert_eq!(set.names(), vec!["A", "B"]);
        assert_eq!(set.get("B").map(Model::name), Some("B"));
        assert!(set.get("C").is_none());
    }
}
