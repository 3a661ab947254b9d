//! Load-once model registry.
//!
//! The registry reads every required model from its store the first time it is
//! asked and keeps the resulting set for the rest of the process. Concurrent
//! first callers block on the same initialization, so the store is read once
//! and nobody ever observes a partial set. A failed load leaves the registry
//! empty; the caller is expected to stop serving.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::models::model::{Model, ModelSet};
use crate::models::store::{LoadFailure, ModelStore};

/// Models the salary ensemble is built from.
pub const REQUIRED_MODELS: [&str; 3] = ["Linear Regression", "Random Forest", "CatBoost"];

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to load model '{model_name}': {cause}")]
    ModelLoad {
        model_name: String,
        #[source]
        cause: LoadFailure,
    },

    #[error("unknown model '{0}'")]
    UnknownModel(String),
}

pub struct ModelRegistry {
    store: Box<dyn ModelStore>,
    required: Vec<String>,
    loaded: OnceCell<Arc<ModelSet>>,
}

impl ModelRegistry {
    /// Create an empty registry; nothing is read until `load`.
    ///
    /// Repeated names in `required` are loaded once.
    pub fn new<I, N>(store: impl ModelStore + 'static, required: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in required {
            let name = name.into();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Self {
            store: Box::new(store),
            required: names,
            loaded: OnceCell::new(),
        }
    }

    /// Registry for the standard three-model ensemble.
    pub fn standard(store: impl ModelStore + 'static) -> Self {
        Self::new(store, REQUIRED_MODELS)
    }

    /// Load every required model, or return the cached set.
    pub fn load(&self) -> Result<Arc<ModelSet>, RegistryError> {
        self.loaded
            .get_or_try_init(|| {
                let location = self.store.location();
                tracing::info!(location = %location, models = self.required.len(), "loading models");

                let mut models: Vec<Model> = Vec::with_capacity(self.required.len());
                for name in &self.required {
                    let model = self.store.load(name).map_err(|cause| {
                        tracing::error!(model = %name, error = %cause, "model failed to load");
                        RegistryError::ModelLoad {
                            model_name: name.clone(),
                            cause,
                        }
                    })?;
                    models.push(model);
                }

                tracing::info!(location = %location, "loaded {} models", models.len());
                Ok(Arc::new(ModelSet::new(models)))
            })
            .cloned()
    }

    /// Look up one model, loading the registry first if needed.
    pub fn get(&self, name: &str) -> Result<Model, RegistryError> {
        let set = self.load()?;
        set.get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownModel(name.to_string()))
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use crate::domain::{FeatureRecord, PredictError};
    use crate::models::model::Pipeline;

    struct Fixed(f64);

    impl Pipeline for Fixed {
        fn predict(&self, _record: &FeatureRecord) -> Result<f64, PredictError> {
            Ok(self.0)
        }
    }

    /// Serves every name except `missing`, counting reads.
    struct CountingStore {
        reads: Arc<AtomicUsize>,
        missing: Option<&'static str>,
    }

    impl ModelStore for CountingStore {
        fn location(&self) -> String {
            "memory".to_string()
        }

        fn load(&self, name: &str) -> Result<Model, LoadFailure> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            if Some(name) == self.missing {
                return Err(LoadFailure::Missing(name.into()));
            }
            Ok(Model::new(name, Fixed(1.0)))
        }
    }

    fn registry(missing: Option<&'static str>) -> (ModelRegistry, Arc<AtomicUsize>) {
        let reads = Arc::new(AtomicUsize::new(0));
        let store = CountingStore {
            reads: Arc::clone(&reads),
            missing,
        };
        (ModelRegistry::standard(store), reads)
    }

    #[test]
    fn second_load_returns_cached_set_without_reading() {
        let (registry, reads) = registry(None);
        assert!(!registry.is_loaded());

        let first = registry.load().unwrap();
        assert_eq!(reads.load(Ordering::SeqCst), 3);
        assert_eq!(first.names(), REQUIRED_MODELS.to_vec());

        let second = registry.load().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(reads.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn concurrent_first_loads_read_storage_once() {
        let (registry, reads) = registry(None);
        let registry = Arc::new(registry);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.load().unwrap())
            })
            .collect();
        let sets: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(reads.load(Ordering::SeqCst), 3);
        assert!(sets.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    fn missing_model_fails_the_whole_load() {
        let (registry, _) = registry(Some("Random Forest"));
        let err = registry.load().unwrap_err();
        assert!(matches!(
            &err,
            RegistryError::ModelLoad { model_name, cause: LoadFailure::Missing(_) } if model_name == "Random Forest"
        ));
        assert!(!registry.is_loaded());
    }

    #[test]
    fn get_unknown_model() {
        let (registry, _) = registry(None);
        assert_eq!(registry.get("CatBoost").unwrap().name(), "CatBoost");
        assert!(matches!(registry.get("XGBoost"), Err(RegistryError::UnknownModel(name)) if name == "XGBoost"));
    }

    #[test]
    fn duplicate_required_names_load_once() {
        let reads = Arc::new(AtomicUsize::new(0));
        let store = CountingStore {
            reads: Arc::clone(&reads),
            missing: None,
        };
        let registry = ModelRegistry::new(store, ["A", "B", "A"]);
        assert_eq!(registry.required(), ["A".to_string(), "B".to_string()]);
        assert_eq!(registry.load().unwrap().len(), 2);
        assert_eq!(reads.load(Ordering::SeqCst), 2);
    }
}
