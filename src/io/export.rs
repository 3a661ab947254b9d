//! Export batch predictions to CSV.
//!
//! One row per predicted input line, one column per model (empty when that
//! model failed for the row), plus both aggregates.

use std::io::Write;
use std::path::Path;

use crate::error::{AppError, EXIT_INPUT};
use crate::io::batch::BatchOutput;

/// Write batch results to a CSV file.
pub fn write_results_csv(path: &Path, output: &BatchOutput, model_names: &[&str]) -> Result<(), AppError> {
    let file = std::fs::File::create(path)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_results(file, output, model_names)
}

pub fn write_results<W: Write>(writer: W, output: &BatchOutput, model_names: &[&str]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(writer);
    let write_err = |e: csv::Error| AppError::new(EXIT_INPUT, format!("Failed to write export CSV: {e}"));

    let mut header: Vec<String> = vec!["line".to_string(), "simple_mean".to_string(), "weighted_mean".to_string()];
    header.extend(model_names.iter().map(|n| n.to_string()));
    header.push("failed_models".to_string());
    writer.write_record(&header).map_err(write_err)?;

    for row in &output.rows {
        let r = &row.result;
        let mut fields = vec![
            row.line.to_string(),
            format!("{:.2}", r.simple_mean),
            format!("{:.2}", r.weighted_mean),
        ];
        fields.extend(
            model_names
                .iter()
                .map(|name| r.value_of(name).map(|v| format!("{v:.2}")).unwrap_or_default()),
        );
        fields.push(
            r.failures
                .iter()
                .map(|f| f.model.as_str())
                .collect::<Vec<_>>()
                .join(";"),
        );
        writer.write_record(&fields).map_err(write_err)?;
    }

    writer
        .flush()
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryCatalog;
    use crate::domain::{FeatureRecord, ModelFailure, ModelPrediction, PredictionResult, RawFeatures};
    use crate::io::batch::BatchRow;

    #[test]
    fn writes_one_column_per_model() {
        let record = FeatureRecord::validate(RawFeatures::default(), &CategoryCatalog::standard().unwrap()).unwrap();
        let output = BatchOutput {
            rows: vec![BatchRow {
                line: 2,
                record,
                result: PredictionResult {
                    per_model: vec![ModelPrediction {
                        model: "A".to_string(),
                        value: 100.0,
                        weight: 40.0,
                    }],
                    failures: vec![ModelFailure {
                        model: "B".to_string(),
                        reason: "boom".to_string(),
                    }],
                    simple_mean: 100.0,
                    weighted_mean: 40.0,
                    weight_coverage: 40.0,
                },
            }],
            row_errors: vec![],
            rows_read: 1,
        };

        let mut buf = Vec::new();
        write_results(&mut buf, &output, &["A", "B"]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "line,simple_mean,weighted_mean,A,B,failed_models\n2,100.00,40.00,100.00,,B\n"
        );
    }
}
