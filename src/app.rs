//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - brings up the catalog, weights and model registry
//! - runs one prediction or a CSV batch
//! - prints reports (text or JSON) and writes optional exports

use clap::Parser;

use crate::catalog::CategoryCatalog;
use crate::cli::{BatchArgs, CatalogArgs, CatalogList, Command, PredictArgs};
use crate::config::PredictorConfig;
use crate::ensemble::WeightTable;
use crate::error::{AppError, EXIT_INPUT};
use crate::logging::{LoggingConfig, init_logging};

pub mod pipeline;

use pipeline::{Engine, resolve_config};

/// Entry point for the `salary` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    init_logging(&LoggingConfig {
        level: cli.log_level.clone(),
        format: cli.log_format,
    });

    match cli.command {
        Command::Predict(args) => handle_predict(args),
        Command::Batch(args) => handle_batch(args),
        Command::Weights => handle_weights(),
        Command::Catalog(args) => handle_catalog(args),
    }
}

fn handle_predict(args: PredictArgs) -> Result<(), AppError> {
    let config = resolve_config(args.engine.models_dir.clone(), args.engine.sequential);
    let engine = Engine::start(&config)?;

    let raw = if args.labels {
        let catalog = &engine.catalog;
        let labeled = args.labeled_features(|domain, code| {
            catalog
                .label_for(domain, code)
                .map(str::to_string)
                .unwrap_or_else(|_| code.to_string())
        });
        labeled.to_codes(catalog)?
    } else {
        args.raw_features()
    };

    let (record, result) = engine.predict(raw)?;

    if args.json {
        let json = serde_json::to_string_pretty(&serde_json::json!({
            "record": record,
            "result": result,
        }))
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to serialize result: {e}")))?;
        println!("{json}");
    } else {
        println!("{}", crate::report::format_prediction(&record, &result, &engine.catalog));
    }

    Ok(())
}

fn handle_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = resolve_config(args.engine.models_dir.clone(), args.engine.sequential);
    let engine = Engine::start(&config)?;

    let output = crate::io::predict_csv_file(&args.input, &engine.catalog, &engine.predictor)?;
    println!("{}", crate::report::format_batch_summary(&output));

    if let Some(path) = &args.output {
        crate::io::write_results_csv(path, &output, &config.model_names())?;
    }

    Ok(())
}

fn handle_weights() -> Result<(), AppError> {
    let config = PredictorConfig::default();
    let weights = WeightTable::from_scores(config.quality_scores)?;
    print!("{}", crate::report::format_weights(&weights));
    Ok(())
}

fn handle_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let text = match (args.list, args.list.domain()) {
        (_, Some(domain)) => crate::report::format_domain(&CategoryCatalog::standard()?, domain),
        (CatalogList::JobTitles, None) => crate::report::format_job_titles(),
        (_, None) => crate::report::format_work_years(),
    };
    print!("{text}");
    Ok(())
}
