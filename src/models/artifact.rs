//! Serialized pipeline formats.
//!
//! A model artifact is a JSON document naming the model and describing one
//! pipeline. Pipelines read the raw, code-encoded record and do their own
//! encoding:
//!
//! - `linear`: intercept + numeric coefficients + one-hot coefficient tables
//! - `tree_ensemble`: binary decision trees combined by mean (forest) or by
//!   sum on top of a base score (boosting)
//!
//! ```json
//! { "name": "Linear Regression", "kind": "linear", "intercept": 95000.0,
//!   "numeric": { "remote_ratio": -40.0 },
//!   "categorical": { "experience_level": { "EN": -30000.0, "MI": 0.0 } } }
//! ```

use std::collections::{BTreeMap, BTreeSet};

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::domain::{Feature, FeatureRecord, FeatureValue, PredictError};
use crate::models::model::{Model, Pipeline};

/// A stored model: its name plus the pipeline description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    #[serde(flatten)]
    pub pipeline: PipelineSpec,
}

impl ModelArtifact {
    /// Structural checks that would otherwise only surface at prediction time.
    pub fn validate(&self) -> Result<(), String> {
        match &self.pipeline {
            PipelineSpec::Linear(p) => p.validate(),
            PipelineSpec::TreeEnsemble(p) => p.validate(),
        }
    }

    pub fn into_model(self) -> Model {
        Model::new(self.name, self.pipeline)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PipelineSpec {
    Linear(LinearPipeline),
    TreeEnsemble(TreeEnsemble),
}

impl Pipeline for PipelineSpec {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictError> {
        match self {
            PipelineSpec::Linear(p) => p.predict(record),
            PipelineSpec::TreeEnsemble(p) => p.predict(record),
        }
    }
}

/// What a one-hot encoder does with a category it never saw in training.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleUnknown {
    /// Reject the record.
    #[default]
    Error,
    /// Encode as all zeros.
    Ignore,
}

/// Linear regression over numeric fields and one-hot encoded categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearPipeline {
    pub intercept: f64,
    #[serde(default)]
    pub numeric: BTreeMap<Feature, f64>,
    /// Per-field coefficient for each known category (the encoder vocabulary).
    #[serde(default)]
    pub categorical: BTreeMap<Feature, BTreeMap<String, f64>>,
    #[serde(default)]
    pub handle_unknown: HandleUnknown,
}

impl LinearPipeline {
    fn validate(&self) -> Result<(), String> {
        if !self.intercept.is_finite() {
            return Err("intercept is not finite".to_string());
        }
        for (feature, coef) in &self.numeric {
            if !feature.is_numeric() {
                return Err(format!("{feature} is categorical but has a numeric coefficient"));
            }
            if !coef.is_finite() {
                return Err(format!("coefficient for {feature} is not finite"));
            }
        }
        for (feature, table) in &self.categorical {
            if feature.is_numeric() {
                return Err(format!("{feature} is numeric but has a category table"));
            }
            if let Some((category, _)) = table.iter().find(|(_, c)| !c.is_finite()) {
                return Err(format!("coefficient for {feature}={category} is not finite"));
            }
        }
        Ok(())
    }

    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictError> {
        let width = self.numeric.len() + self.categorical.len();
        let mut coefs = Vec::with_capacity(width);
        let mut xs = Vec::with_capacity(width);

        for (&feature, &coef) in &self.numeric {
            let FeatureValue::Numeric(x) = record.value(feature) else {
                return Err(PredictError::FeatureType(feature));
            };
            coefs.push(coef);
            xs.push(x);
        }

        for (&feature, table) in &self.categorical {
            let FeatureValue::Categorical(value) = record.value(feature) else {
                return Err(PredictError::FeatureType(feature));
            };
            match (table.get(value), self.handle_unknown) {
                (Some(&coef), _) => {
                    coefs.push(coef);
                    xs.push(1.0);
                }
                (None, HandleUnknown::Ignore) => {}
                (None, HandleUnknown::Error) => {
                    return Err(PredictError::UnseenCategory {
                        feature,
                        value: value.to_string(),
                    });
                }
            }
        }

        let coefs = DVector::from_vec(coefs);
        let xs = DVector::from_vec(xs);
        Ok(self.intercept + coefs.dot(&xs))
    }
}

/// How tree outputs are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combine {
    /// `base_score + mean(trees)`.
    #[default]
    Mean,
    /// `base_score + sum(trees)`.
    Sum,
}

/// A forest or boosted ensemble of binary decision trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEnsemble {
    #[serde(default)]
    pub base_score: f64,
    #[serde(default)]
    pub combine: Combine,
    /// Categories seen in training, per field. A value outside its set is rejected.
    #[serde(default)]
    pub vocabulary: BTreeMap<Feature, BTreeSet<String>>,
    pub trees: Vec<Tree>,
}

impl TreeEnsemble {
    fn validate(&self) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("tree ensemble has no trees".to_string());
        }
        if !self.base_score.is_finite() {
            return Err("base_score is not finite".to_string());
        }
        if let Some(feature) = self.vocabulary.keys().find(|f| f.is_numeric()) {
            return Err(format!("vocabulary given for numeric field {feature}"));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate().map_err(|e| format!("tree {i}: {e}"))?;
        }
        Ok(())
    }

    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictError> {
        for (&feature, known) in &self.vocabulary {
            let FeatureValue::Categorical(value) = record.value(feature) else {
                return Err(PredictError::FeatureType(feature));
            };
            if !known.contains(value) {
                return Err(PredictError::UnseenCategory {
                    feature,
                    value: value.to_string(),
                });
            }
        }

        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.evaluate(record)?;
        }

        let combined = match self.combine {
            Combine::Mean => total / self.trees.len() as f64,
            Combine::Sum => total,
        };
        Ok(self.base_score + combined)
    }
}

/// Nodes stored in a flat list; node 0 is the root and children always come
/// after their parent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    Leaf {
        value: f64,
    },
    /// `value <= threshold` goes left.
    Threshold {
        feature: Feature,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Membership in `categories` goes left.
    Category {
        feature: Feature,
        categories: BTreeSet<String>,
        left: usize,
        right: usize,
    },
}

impl Tree {
    fn validate(&self) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        let len = self.nodes.len();
        for (idx, node) in self.nodes.iter().enumerate() {
            let (left, right) = match node {
                Node::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(format!("leaf {idx} is not finite"));
                    }
                    continue;
                }
                Node::Threshold { feature, threshold, left, right } => {
                    if !feature.is_numeric() {
                        return Err(format!("node {idx}: threshold split on categorical {feature}"));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {idx}: threshold is not finite"));
                    }
                    (*left, *right)
                }
                Node::Category { feature, left, right, .. } => {
                    if feature.is_numeric() {
                        return Err(format!("node {idx}: category split on numeric {feature}"));
                    }
                    (*left, *right)
                }
            };
            for child in [left, right] {
                if child <= idx || child >= len {
                    return Err(format!("node {idx}: child index {child} out of order or range"));
                }
            }
        }
        Ok(())
    }

    fn evaluate(&self, record: &FeatureRecord) -> Result<f64, PredictError> {
        let mut idx = 0;
        loop {
            let node = self
                .nodes
                .get(idx)
                .ok_or_else(|| PredictError::Internal(format!("tree node {idx} out of range")))?;

            let next = match node {
                Node::Leaf { value } => return Ok(*value),
                Node::Threshold { feature, threshold, left, right } => match record.value(*feature) {
                    FeatureValue::Numeric(x) if x <= *threshold => *left,
                    FeatureValue::Numeric(_) => *right,
                    FeatureValue::Categorical(_) => return Err(PredictError::FeatureType(*feature)),
                },
                Node::Category { feature, categories, left, right } => match record.value(*feature) {
                    FeatureValue::Categorical(v) if categories.contains(v) => *left,
                    FeatureValue::Categorical(_) => *right,
                    FeatureValue::Numeric(_) => return Err(PredictError::FeatureType(*feature)),
                },
            };

            if next <= idx {
                return Err(PredictError::Internal(format!("tree node {idx} points backwards")));
            }
            idx = next;
        }
    }
}
