//! Quality-score weights.
//!
//! `normalized_weight = raw_score / Σ raw_score × 100`, computed once when the
//! table is built. Changing scores means building a new table.

use serde::Serialize;
use thiserror::Error;

/// Tolerance used when checking that weights add up to 100.
pub const WEIGHT_SUM_EPS: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightError {
    #[error("weight table needs at least one strictly positive quality score")]
    EmptyTable,

    #[error("quality score for '{model}' must be finite and non-negative, got {score}")]
    InvalidScore { model: String, score: f64 },

    #[error("quality score for '{0}' given more than once")]
    DuplicateModel(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightEntry {
    pub model_name: String,
    pub raw_score: f64,
    /// Percent, in `[0, 100]`.
    pub normalized_weight: f64,
}

/// Immutable per-model weights summing to 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightTable {
    entries: Vec<WeightEntry>,
}

impl WeightTable {
    pub fn from_scores<I, N>(scores: I) -> Result<Self, WeightError>
    where
        I: IntoIterator<Item = (N, f64)>,
        N: Into<String>,
    {
        let mut raw: Vec<(String, f64)> = Vec::new();
        for (name, score) in scores {
            let name = name.into();
            if !score.is_finite() || score < 0.0 {
                return Err(WeightError::InvalidScore { model: name, score });
            }
            if raw.iter().any(|(n, _)| *n == name) {
                return Err(WeightError::DuplicateModel(name));
            }
            raw.push((name, score));
        }

        let total: f64 = raw.iter().map(|(_, s)| s).sum();
        if total <= 0.0 {
            return Err(WeightError::EmptyTable);
        }

        let entries = raw
            .into_iter()
            .map(|(model_name, raw_score)| WeightEntry {
                model_name,
                raw_score,
                normalized_weight: raw_score / total * 100.0,
            })
            .collect();

        Ok(Self { entries })
    }

    /// Weight in percent; 0 for models the table does not know.
    pub fn weight_of(&self, model_name: &str) -> f64 {
        self.entries
            .iter()
            .find(|e| e.model_name == model_name)
            .map(|e| e.normalized_weight)
            .unwrap_or(0.0)
    }

    pub fn entries(&self) -> &[WeightEntry] {
        &self.entries
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.normalized_weight).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scores_normalize_to_20_35_45() {
        let table =
            WeightTable::from_scores([("A", 2.0), ("B", 3.5), ("C", 4.5)]).unwrap();
        assert!((table.weight_of("A") - 20.0).abs() < WEIGHT_SUM_EPS);
        assert!((table.weight_of("B") - 35.0).abs() < WEIGHT_SUM_EPS);
        assert!((table.weight_of("C") - 45.0).abs() < WEIGHT_SUM_EPS);
        assert!((table.total() - 100.0).abs() < WEIGHT_SUM_EPS);
    }

    #[test]
    fn weights_sum_to_100_for_assorted_tables() {
        let cases: Vec<Vec<f64>> = vec![
            vec![1.0],
            vec![0.1, 0.2, 0.3],
            vec![7.0, 0.0, 13.0, 1e-6],
            vec![1e9, 3.0, 42.5, 0.001, 9.99],
        ];
        for scores in cases {
            let table = WeightTable::from_scores(
                scores.iter().enumerate().map(|(i, s)| (format!("m{i}"), *s)),
            )
            .unwrap();
            assert!(
                (table.total() - 100.0).abs() < WEIGHT_SUM_EPS,
                "scores {scores:?} sum to {}",
                table.total()
            );
            assert!(table.entries().iter().all(|e| (0.0..=100.0).contains(&e.normalized_weight)));
        }
    }

    #[test]
    fn unknown_model_weighs_nothing() {
        let table = WeightTable::from_scores([("A", 1.0)]).unwrap();
        assert_eq!(table.weight_of("B"), 0.0);
    }

    #[test]
    fn rejects_all_zero_or_empty_scores() {
        assert_eq!(
            WeightTable::from_scores(Vec::<(String, f64)>::new()),
            Err(WeightError::EmptyTable)
        );
        assert_eq!(
            WeightTable::from_scores([("A", 0.0), ("B", 0.0)]),
            Err(WeightError::EmptyTable)
        );
    }

    #[test]
    fn rejects_negative_nan_and_duplicate_scores() {
        assert!(matches!(
            WeightTable::from_scores([("A", -1.0), ("B", 2.0)]),
            Err(WeightError::InvalidScore { .. })
        ));
        assert!(matches!(
            WeightTable::from_scores([("A", f64::NAN)]),
            Err(WeightError::InvalidScore { .. })
        ));
        assert_eq!(
            WeightTable::from_scores([("A", 1.0), ("A", 2.0)]),
            Err(WeightError::DuplicateModel("A".to_string()))
        );
    }
}
