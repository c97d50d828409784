use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

use crate::modules::prediction::model::{FeatureRecord, FeatureValue, FEATURE_NAMES};

/// Classifier output. Opaque to the API and passed through unmodified.
pub type Label = Value;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unknown feature in model: {0}")]
    UnknownFeature(String),
    #[error("Feature {feature} is not {expected}")]
    FeatureType { feature: String, expected: &'static str },
    #[error("Invalid model: {0}")]
    InvalidTree(String),
}

/// A pre-trained model mapping one normalized record to one label.
pub trait Classifier: Send + Sync {
    fn predict(&self, record: &FeatureRecord) -> Result<Label, ClassifierError>;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Leaf {
        label: Label,
    },
    /// `value <= threshold` goes left.
    Numeric {
        feature: String,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// Membership in `categories` goes left.
    Categorical {
        feature: String,
        categories: Vec<String>,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// Decision tree read from a JSON artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeClassifier {
    #[serde(default)]
    pub name: Option<String>,
    root: Node,
}

impl TreeClassifier {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ClassifierError> {
        let tree: TreeClassifier = serde_json::from_str(raw)?;
        tree.check()?;
        Ok(tree)
    }

    fn check(&self) -> Result<(), ClassifierError> {
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { label } => {
                    if label.is_null() {
                        return Err(ClassifierError::InvalidTree("leaf without label".to_string()));
                    }
                }
                Node::Numeric { feature, threshold, left, right } => {
                    known_feature(feature)?;
                    if !threshold.is_finite() {
                        return Err(ClassifierError::InvalidTree(format!(
                            "non-finite threshold on {}",
                            feature
                        )));
                    }
                    stack.push(left);
                    stack.push(right);
                }
                Node::Categorical { feature, left, right, .. } => {
                    known_feature(feature)?;
                    stack.push(left);
                    stack.push(right);
                }
            }
        }
        Ok(())
    }
}

fn known_feature(feature: &str) -> Result<(), ClassifierError> {
    if FEATURE_NAMES.contains(&feature) {
        Ok(())
    } else {
        Err(ClassifierError::UnknownFeature(feature.to_string()))
    }
}

impl Classifier for TreeClassifier {
    fn predict(&self, record: &FeatureRecord) -> Result<Label, ClassifierError> {
        let mut node = &self.root;
        loop {
            node = match node {
                Node::Leaf { label } => return Ok(label.clone()),
                Node::Numeric { feature, threshold, left, right } => {
                    match record.feature(feature) {
                        Some(FeatureValue::Number(v)) if v <= *threshold => &**left,
                        Some(FeatureValue::Number(_)) => &**right,
                        Some(FeatureValue::Text(_)) => {
                            return Err(ClassifierError::FeatureType {
                                feature: feature.clone(),
                                expected: "numeric",
                            })
                        }
                        None => return Err(ClassifierError::UnknownFeature(feature.clone())),
                    }
                }
                Node::Categorical { feature, categories, left, right } => {
                    match record.feature(feature) {
                        Some(FeatureValue::Text(v)) if categories.iter().any(|c| c == v) => &**left,
                        Some(FeatureValue::Text(_)) => &**right,
                        Some(FeatureValue::Number(_)) => {
                            return Err(ClassifierError::FeatureType {
                                feature: feature.clone(),
                                expected: "categorical",
                            })
                        }
                        None => return Err(ClassifierError::UnknownFeature(feature.clone())),
                    }
                }
            };
        }
    }
}
