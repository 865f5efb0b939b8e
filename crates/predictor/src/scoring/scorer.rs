#![forbid(unsafe_code)]

use crate::prediction::FeatureRow;

/// A binary classifier consumed as a black box.
pub trait Scorer: Send + Sync {
    /// Positive-class probability for a single feature row.
    fn predict_proba(&self, row: &FeatureRow) -> Result<f64, ScoringError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    #[error("tree {tree} has no node {node}")]
    MalformedTree { tree: usize, node: usize },

    #[error("scorer failed: {0}")]
    Model(String),
}

pub(crate) fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
