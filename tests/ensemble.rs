use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::tempdir;

use salary_ensemble::app::pipeline::Engine;
use salary_ensemble::catalog::CategoryCatalog;
use salary_ensemble::config::PredictorConfig;
use salary_ensemble::domain::{FeatureRecord, RawFeatures};
use salary_ensemble::ensemble::{EnsembleError, EnsemblePredictor, Invocation, WeightTable};
use salary_ensemble::models::{FsModelStore, ModelRegistry, REQUIRED_MODELS, artifact_file_name};

const EPS: f64 = 1e-6;

fn write_artifact(dir: &Path, name: &str, body: &str) {
    let json = format!(r#"{{ "name": "{name}", "kind": "linear", {body} }}"#);
    fs::write(dir.join(artifact_file_name(name)), json).unwrap();
}

fn reference_weights() -> WeightTable {
    WeightTable::from_scores(PredictorConfig::default().quality_scores).unwrap()
}

fn predictor(dir: &Path, invocation: Invocation) -> EnsemblePredictor {
    let registry = Arc::new(ModelRegistry::standard(FsModelStore::new(dir)));
    EnsemblePredictor::new(registry, reference_weights()).with_invocation(invocation)
}

fn record(raw: RawFeatures) -> FeatureRecord {
    FeatureRecord::validate(raw, &CategoryCatalog::standard().unwrap()).unwrap()
}

#[test]
fn constant_models_give_reference_means() {
    let dir = tempdir().unwrap();
    write_artifact(dir.path(), "Linear Regression", r#""intercept": 100000.0"#);
    write_artifact(dir.path(), "Random Forest", r#""intercept": 110000.0"#);
    write_artifact(dir.path(), "CatBoost", r#""intercept": 120000.0"#);

    for invocation in [Invocation::Parallel, Invocation::Sequential] {
        let result = predictor(dir.path(), invocation)
            .predict(&record(RawFeatures::default()))
            .unwrap();

        assert_eq!(
            result.per_model.iter().map(|p| p.model.as_str()).collect::<Vec<_>>(),
            REQUIRED_MODELS.to_vec()
        );
        assert!((result.simple_mean - 110_000.0).abs() < EPS);
        assert!((result.weighted_mean - 112_500.0).abs() < EPS, "got {}", result.weighted_mean);
        assert!(result.failures.is_empty());
    }
}

#[test]
fn unseen_category_drops_one_model_without_renormalizing() {
    let dir = tempdir().unwrap();
    write_artifact(dir.path(), "Linear Regression", r#""intercept": 100000.0"#);
    write_artifact(
        dir.path(),
        "Random Forest",
        r#""intercept": 110000.0, "categorical": { "company_location": { "US": 0.0 } }"#,
    );
    write_artifact(dir.path(), "CatBoost", r#""intercept": 120000.0"#);

    let raw = RawFeatures {
        company_location: "AQ".to_string(),
        ..RawFeatures::default()
    };
    let result = predictor(dir.path(), Invocation::Parallel).predict(&record(raw)).unwrap();

    assert_eq!(result.per_model.len(), 2);
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].model, "Random Forest");
    assert!(result.failures[0].reason.contains("company_location"));
    assert!((result.simple_mean - 110_000.0).abs() < EPS);
    // 100000×0.20 + 120000×0.45
    assert!((result.weighted_mean - 74_000.0).abs() < EPS, "got {}", result.weighted_mean);
    assert!((result.weight_coverage - 65.0).abs() < EPS);
}

#[test]
fn every_model_failing_is_reported() {
    let dir = tempdir().unwrap();
    let strict = r#""intercept": 1.0, "categorical": { "company_size": { "M": 0.0 } }"#;
    for name in REQUIRED_MODELS {
        write_artifact(dir.path(), name, strict);
    }

    let err = predictor(dir.path(), Invocation::Parallel)
        .predict(&record(RawFeatures::default()))
        .unwrap_err();
    match err {
        EnsembleError::Empty { failures } => assert_eq!(failures.len(), 3),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn shipped_models_load_and_predict() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("saved_models");
    let config = PredictorConfig {
        models_dir: dir,
        ..PredictorConfig::default()
    };
    let engine = Engine::start(&config).unwrap();
    let (_, result) = engine.predict(RawFeatures::default()).unwrap();

    assert!(result.failures.is_empty(), "{:?}", result.failures);
    assert_eq!(result.value_of("Linear Regression"), Some(153_000.0));
    assert_eq!(result.value_of("CatBoost"), Some(143_500.0));
    let forest = result.value_of("Random Forest").unwrap();
    assert!((forest - 412_000.0 / 3.0).abs() < EPS);

    let expected = 153_000.0 * 0.20 + forest * 0.35 + 143_500.0 * 0.45;
    assert!((result.weighted_mean - expected).abs() < EPS);
}
