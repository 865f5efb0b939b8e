#![forbid(unsafe_code)]

use crate::domain::{Competitor, CompetitorId, Venue};
use crate::prediction::RaceParams;
use crate::ranking::Ranking;
use serde::Serialize;

/// Win probability of one competitor. Results of a run are not normalized,
/// so they need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub competitor_id: CompetitorId,
    pub competitor_name: &'static str,
    pub probability: f64,
}

impl PredictionResult {
    pub fn new(competitor: &Competitor, probability: f64) -> Self {
        Self {
            competitor_id: competitor.id,
            competitor_name: competitor.name,
            probability,
        }
    }
}

/// A complete prediction run, ready to be rendered.
#[derive(Debug, Clone, Serialize)]
pub struct Forecast {
    pub venue: &'static Venue,
    pub race: RaceParams,
    pub ranking: Ranking,
}
