//! Model storage.
//!
//! The registry does not know where artifacts live; it asks a `ModelStore` for
//! each required model by name. The filesystem store maps
//! `"Linear Regression"` to `<dir>/Linear_Regression.json`.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::artifact::ModelArtifact;
use crate::models::model::Model;

/// Why a single artifact could not be loaded.
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("artifact not found at '{}'", .0.display())]
    Missing(PathBuf),

    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt artifact: {0}")]
    Corrupt(String),
}

/// A named location models can be loaded from.
pub trait ModelStore: Send + Sync {
    /// Human-readable location, for logs and error messages.
    fn location(&self) -> String;

    fn load(&self, name: &str) -> Result<Model, LoadFailure>;
}

/// JSON artifacts in a directory.
#[derive(Debug, Clone)]
pub struct FsModelStore {
    dir: PathBuf,
}

impl FsModelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.dir.join(artifact_file_name(name))
    }
}

/// `"Random Forest"` -> `"Random_Forest.json"`.
pub fn artifact_file_name(name: &str) -> String {
    format!("{}.json", name.replace(' ', "_"))
}

impl ModelStore for FsModelStore {
    fn location(&self) -> String {
        self.dir.display().to_string()
    }

    fn load(&self, name: &str) -> Result<Model, LoadFailure> {
        let path = self.artifact_path(name);
        let file = File::open(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadFailure::Missing(path.clone())
            } else {
                LoadFailure::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| LoadFailure::Corrupt(format!("invalid JSON in '{}': {e}", path.display())))?;

        if artifact.name != name {
            return Err(LoadFailure::Corrupt(format!(
                "'{}' holds model '{}', expected '{name}'",
                path.display(),
                artifact.name
            )));
        }
        artifact.validate().map_err(LoadFailure::Corrupt)?;

        Ok(artifact.into_model())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::tempdir;

    #[test]
    fn file_names_replace_spaces() {
        assert_eq!(artifact_file_name("Linear Regression"), "Linear_Regression.json");
        assert_eq!(artifact_file_name("CatBoost"), "CatBoost.json");
    }

    #[test]
    fn loads_a_valid_artifact() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("CatBoost.json"),
            r#"{ "name": "CatBoost", "kind": "linear", "intercept": 5.0 }"#,
        )
        .unwrap();

        let store = FsModelStore::new(dir.path());
        let model = store.load("CatBoost").unwrap();
        assert_eq!(model.name(), "CatBoost");
    }

    #[test]
    fn missing_file_is_reported_as_missing() {
        let dir = tempdir().unwrap();
        let store = FsModelStore::new(dir.path());
        assert!(matches!(store.load("Random Forest"), Err(LoadFailure::Missing(_))));
    }

    #[test]
    fn garbage_and_mismatched_names_are_corrupt() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("A.json"), "not json").unwrap();
        fs::write(
            dir.path().join("B.json"),
            r#"{ "name": "Someone Else", "kind": "linear", "intercept": 1.0 }"#,
        )
        .unwrap();

        let store = FsModelStore::new(dir.path());
        assert!(matches!(store.load("A"), Err(LoadFailure::Corrupt(_))));
        let err = store.load("B").unwrap_err();
        assert!(err.to_string().contains("Someone Else"), "{err}");
    }
}
