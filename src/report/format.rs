//! Text formatting for the terminal.

use crate::catalog::{self, CategoryCatalog, Domain};
use crate::domain::{Feature, FeatureRecord, FeatureValue, PredictionResult};
use crate::ensemble::WeightTable;
use crate::io::batch::BatchOutput;

/// Format an amount as `$127,500.00 USD`.
pub fn format_usd(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}${}.{frac_part} USD", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Full report for one request: inputs, per-model values, both means.
pub fn format_prediction(record: &FeatureRecord, result: &PredictionResult, catalog: &CategoryCatalog) -> String {
    let mut out = String::new();

    out.push_str("=== salary - ensemble prediction ===\n");
    for feature in Feature::ALL {
        out.push_str(&format!("{:<20} {}\n", feature.name(), describe(record, feature, catalog)));
    }

    out.push_str("\nModel predictions:\n");
    for p in &result.per_model {
        out.push_str(&format!(
            "  {:<20} (weight {:>6.2}%)  {:>20}\n",
            p.model,
            p.weight,
            format_usd(p.value)
        ));
    }
    for f in &result.failures {
        out.push_str(&format!("  {:<20} failed: {}\n", f.model, f.reason));
    }

    out.push('\n');
    out.push_str(&format!("Simple mean:   {}\n", format_usd(result.simple_mean)));
    out.push_str(&format!("Weighted mean: {}\n", format_usd(result.weighted_mean)));

    if result.weight_coverage > 0.0 && result.weight_coverage < 100.0 - 1e-9 {
        out.push_str(&format!(
            "note: only {:.2}% of the ensemble weight contributed; the weighted mean is not rescaled\n",
            result.weight_coverage
        ));
    }

    out.push_str("\nWeighted mean = Σ prediction_i × weight_i / 100, weights normalized to 100% from held-out R².\n");
    out
}

fn describe(record: &FeatureRecord, feature: Feature, catalog: &CategoryCatalog) -> String {
    match (record.value(feature), feature.domain()) {
        (FeatureValue::Categorical(code), Some(domain)) => match catalog.label_for(domain, code) {
            Ok(label) => format!("{code} ({label})"),
            Err(_) => code.to_string(),
        },
        (FeatureValue::Categorical(value), None) => value.to_string(),
        (FeatureValue::Numeric(v), _) => format!("{v}"),
    }
}

/// Weight table as printed by `salary weights`.
pub fn format_weights(weights: &WeightTable) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<20} {:>10} {:>10}\n", "model", "score", "weight %"));
    out.push_str(&format!("{:-<20} {:-<10} {:-<10}\n", "", "", ""));
    for e in weights.entries() {
        out.push_str(&format!(
            "{:<20} {:>10.2} {:>10.2}\n",
            truncate(&e.model_name, 20),
            e.raw_score,
            e.normalized_weight
        ));
    }
    out
}

/// `code  label` lines for one domain.
pub fn format_domain(catalog: &CategoryCatalog, domain: Domain) -> String {
    let mut out = String::new();
    for m in catalog.entries(domain) {
        out.push_str(&format!("{:<5} {}\n", m.code, m.label));
    }
    out
}

pub fn format_job_titles() -> String {
    catalog::job_titles().iter().map(|t| format!("{t}\n")).collect()
}

pub fn format_work_years() -> String {
    catalog::work_years().iter().map(|y| format!("{y}\n")).collect()
}

/// Batch summary plus row errors.
pub fn format_batch_summary(output: &BatchOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Rows: read={} | predicted={} | rejected={}\n",
        output.rows_read,
        output.rows.len(),
        output.row_errors.len()
    ));

    if !output.rows.is_empty() {
        out.push_str(&format!("\n{:>6} {:>22} {:>22} {:<}\n", "line", "simple mean", "weighted mean", "failed"));
        for row in &output.rows {
            let failed: Vec<&str> = row.result.failures.iter().map(|f| f.model.as_str()).collect();
            out.push_str(
                format!(
                    "{:>6} {:>22} {:>22} {}\n",
                    row.line,
                    format_usd(row.result.simple_mean),
                    format_usd(row.result.weighted_mean),
                    failed.join(", ")
                )
                .trim_end(),
            );
            out.push('\n');
        }
    }

    if !output.row_errors.is_empty() {
        out.push_str("\nRow errors:\n");
        for e in &output.row_errors {
            out.push_str(&format!("  line {}: {}\n", e.line, e.message));
        }
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}
