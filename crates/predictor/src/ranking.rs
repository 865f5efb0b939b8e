#![forbid(unsafe_code)]

use crate::prediction::PredictionResult;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::trace;

/// Prediction results ordered from most to least likely winner.
///
/// Equal probabilities keep the order they were scored in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ranking(Vec<PredictionResult>);

impl Ranking {
    pub fn new(mut results: Vec<PredictionResult>) -> Self {
        // `sort_by` is stable, which gives the tie-break.
        results.sort_by(|a, b| {
            b.probability
                .partial_cmp(&a.probability)
                .unwrap_or(Ordering::Equal)
        });
        trace!(
            entries = results.len(),
            leader = results.first().map(|r| r.competitor_name),
            "ranking built"
        );
        Self(results)
    }

    pub fn entries(&self) -> &[PredictionResult] {
        &self.0
    }

    /// The first `n` entries, or all of them when there are fewer.
    pub fn top(&self, n: usize) -> &[PredictionResult] {
        &self.0[..n.min(self.0.len())]
    }

    pub fn leader(&self) -> Option<&PredictionResult> {
        self.0.first()
    }

    /// Highest probability, `0.0` for an empty ranking.
    pub fn max_probability(&self) -> f64 {
        self.leader().map_or(0.0, |r| r.probability)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PredictionResult> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a PredictionResult;
    type IntoIter = std::slice::Iter<'a, PredictionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
