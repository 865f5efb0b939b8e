#![forbid(unsafe_code)]

use super::scorer::{Scorer, ScoringError, sigmoid};
use crate::domain::{CompetitorId, VenueId};
use crate::prediction::{Feature, FeatureRow};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Logistic regression over the numeric columns, with optional one-hot style
/// offsets for the categorical venue and competitor ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogisticModel {
    pub intercept: f64,
    #[serde(default)]
    pub weights: BTreeMap<Feature, f64>,
    #[serde(default)]
    pub venue_offsets: BTreeMap<VenueId, f64>,
    #[serde(default)]
    pub competitor_offsets: BTreeMap<CompetitorId, f64>,
}

impl LogisticModel {
    pub fn logit(&self, row: &FeatureRow) -> f64 {
        let linear: f64 = self
            .weights
            .iter()
            .map(|(feature, weight)| weight * row.value(*feature))
            .sum();
        let venue = self.venue_offsets.get(&row.venue).copied().unwrap_or(0.0);
        let competitor = self
            .competitor_offsets
            .get(&row.competitor)
            .copied()
            .unwrap_or(0.0);
        self.intercept + linear + venue + competitor
    }

    pub(crate) fn check(&self) -> Result<(), String> {
        let coefficients = std::iter::once(&self.intercept)
            .chain(self.weights.values())
            .chain(self.venue_offsets.values())
            .chain(self.competitor_offsets.values());
        for coefficient in coefficients {
            if !coefficient.is_finite() {
                return Err(format!("non-finite coefficient {coefficient}"));
            }
        }
        Ok(())
    }
}

impl Scorer for LogisticModel {
    fn predict_proba(&self, row: &FeatureRow) -> Result<f64, ScoringError> {
        Ok(sigmoid(self.logit(row)))
    }
}
