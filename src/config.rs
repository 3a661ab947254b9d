//! Predictor configuration.
//!
//! Precedence for the model directory: `--models-dir` flag, then the
//! `SALARY_MODELS_DIR` environment variable (a `.env` file is honored), then
//! `saved_models`. Quality scores are a fixed table; they are not read at runtime.

use std::path::PathBuf;

use crate::ensemble::Invocation;

pub const MODELS_DIR_ENV: &str = "SALARY_MODELS_DIR";
pub const DEFAULT_MODELS_DIR: &str = "saved_models";

/// Held-out R² scores of the trained models, used as raw weights.
pub const DEFAULT_QUALITY_SCORES: [(&str, f64); 3] = [
    ("Linear Regression", 2.0),
    ("Random Forest", 3.5),
    ("CatBoost", 4.5),
];

#[derive(Debug, Clone)]
pub struct PredictorConfig {
    pub models_dir: PathBuf,
    pub quality_scores: Vec<(String, f64)>,
    pub invocation: Invocation,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
            quality_scores: DEFAULT_QUALITY_SCORES
                .iter()
                .map(|&(name, score)| (name.to_string(), score))
                .collect(),
            invocation: Invocation::default(),
        }
    }
}

impl PredictorConfig {
    /// Defaults, with the model directory taken from the environment when set.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::with_models_dir_var(std::env::var(MODELS_DIR_ENV).ok())
    }

    fn with_models_dir_var(value: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = value.filter(|v| !v.trim().is_empty()) {
            config.models_dir = PathBuf::from(dir);
        }
        config
    }

    /// Names of the models the weight table knows about, in table order.
    pub fn model_names(&self) -> Vec<&str> {
        self.quality_scores.iter().map(|(n, _)| n.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_trained_ensemble() {
        let config = PredictorConfig::default();
        assert_eq!(config.models_dir, PathBuf::from("saved_models"));
        assert_eq!(
            config.model_names(),
            vec!["Linear Regression", "Random Forest", "CatBoost"]
        );
        assert_eq!(config.invocation, Invocation::Parallel);
    }

    #[test]
    fn env_value_overrides_directory_unless_blank() {
        let config = PredictorConfig::with_models_dir_var(Some("/srv/models".to_string()));
        assert_eq!(config.models_dir, PathBuf::from("/srv/models"));

        let config = PredictorConfig::with_models_dir_var(Some("  ".to_string()));
        assert_eq!(config.models_dir, PathBuf::from(DEFAULT_MODELS_DIR));
    }
}
