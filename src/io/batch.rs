//! Batch prediction from CSV.
//!
//! Goals:
//! - accept one request per row, categorical fields as codes
//! - validate each row independently and keep going on bad rows
//! - report row-level errors with line numbers
//!
//! Required columns: `work_year, experience_level, employment_type, job_title,
//! salary_currency, employee_residence, remote_ratio, company_location,
//! company_size`. Extra columns are ignored.

use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::catalog::CategoryCatalog;
use crate::domain::{Feature, FeatureRecord, PredictionResult, RawFeatures};
use crate::ensemble::{EnsembleError, EnsemblePredictor};
use crate::error::{AppError, EXIT_INPUT};

/// A row that produced a prediction.
#[derive(Debug, Clone)]
pub struct BatchRow {
    pub line: u64,
    pub record: FeatureRecord,
    pub result: PredictionResult,
}

/// A row that was rejected or for which no model produced a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub line: u64,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub rows: Vec<BatchRow>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Open `path` and predict every row.
pub fn predict_csv_file(
    path: &Path,
    catalog: &CategoryCatalog,
    predictor: &EnsemblePredictor,
) -> Result<BatchOutput, AppError> {
    let file = std::fs::File::open(path)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to open CSV '{}': {e}", path.display())))?;
    predict_csv(file, catalog, predictor)
}

/// Predict every row of a CSV stream.
///
/// Row problems are collected; only unreadable input or a model-load failure
/// aborts the batch.
pub fn predict_csv<R: Read>(
    reader: R,
    catalog: &CategoryCatalog,
    predictor: &EnsemblePredictor,
) -> Result<BatchOutput, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to read CSV header: {e}")))?;
    let headers: StringRecord = headers.iter().map(normalize_header_name).collect();
    ensure_required_columns_exist(&headers)?;

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, record) in reader.records().enumerate() {
        rows_read += 1;
        // Header is line 1.
        let fallback_line = idx as u64 + 2;

        let record = match record {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line: e.position().map(|p| p.line()).unwrap_or(fallback_line),
                    message: format!("Unreadable row: {e}"),
                });
                continue;
            }
        };
        let line = record.position().map(|p| p.line()).unwrap_or(fallback_line);

        let raw: RawFeatures = match record.deserialize(Some(&headers)) {
            Ok(raw) => raw,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("Malformed row: {e}"),
                });
                continue;
            }
        };

        let feature_record = match FeatureRecord::validate(raw, catalog) {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: e.to_string(),
                });
                continue;
            }
        };

        match predictor.predict(&feature_record) {
            Ok(result) => rows.push(BatchRow {
                line,
                record: feature_record,
                result,
            }),
            Err(err @ EnsembleError::Empty { .. }) => row_errors.push(RowError {
                line,
                message: err.to_string(),
            }),
            Err(err @ EnsembleError::Registry(_)) => return Err(err.into()),
        }
    }

    tracing::info!(
        rows_read,
        predicted = rows.len(),
        rejected = row_errors.len(),
        "batch complete"
    );

    Ok(BatchOutput {
        rows,
        row_errors,
        rows_read,
    })
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn ensure_required_columns_exist(headers: &StringRecord) -> Result<(), AppError> {
    let missing: Vec<&str> = Feature::ALL
        .iter()
        .map(|f| f.name())
        .filter(|name| !headers.iter().any(|h| h == *name))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::new(
            EXIT_INPUT,
            format!("Missing required column(s): {}", missing.join(", ")),
        ))
    }
}
