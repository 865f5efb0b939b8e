#![forbid(unsafe_code)]

use crate::Error;
use crate::domain::{self, Competitor};
use crate::prediction::{Forecast, PredictionResult, RaceParams};
use crate::ranking::Ranking;
use crate::scoring::{Scorer, ScoringError};
use tracing::debug;

/// Scores every competitor for a race, one scorer call each.
pub struct RacePredictor<'a> {
    scorer: &'a dyn Scorer,
    competitors: &'a [Competitor],
}

impl<'a> RacePredictor<'a> {
    pub fn new(scorer: &'a dyn Scorer) -> Self {
        Self::with_competitors(scorer, domain::competitors())
    }

    pub fn with_competitors(scorer: &'a dyn Scorer, competitors: &'a [Competitor]) -> Self {
        Self {
            scorer,
            competitors,
        }
    }

    /// Validate the race and score each competitor in table order.
    ///
    /// The first scoring failure aborts the run; no partial results are
    /// returned.
    pub fn predict(&self, race: &RaceParams) -> Result<Vec<PredictionResult>, Error> {
        race.validate()?;
        self.competitors
            .iter()
            .map(|competitor| self.score(race, competitor))
            .collect()
    }

    /// Predict and rank, resolving the venue for display.
    pub fn forecast(&self, race: &RaceParams) -> Result<Forecast, Error> {
        let venue = domain::venue_by_id(race.venue)
            .ok_or_else(|| Error::VenueNotFound(format!("id {}", race.venue)))?;
        let results = self.predict(race)?;
        Ok(Forecast {
            venue,
            race: *race,
            ranking: Ranking::new(results),
        })
    }

    fn score(&self, race: &RaceParams, competitor: &Competitor) -> Result<PredictionResult, Error> {
        let row = race.feature_row(competitor.id);
        let probability = self
            .scorer
            .predict_proba(&row)
            .and_then(check_probability)
            .map_err(|source| Error::Scoring {
                competitor: competitor.name,
                source,
            })?;
        debug!(competitor = competitor.name, probability, "scored competitor");
        Ok(PredictionResult::new(competitor, probability))
    }
}

fn check_probability(probability: f64) -> Result<f64, ScoringError> {
    if (0.0..=1.0).contains(&probability) {
        Ok(probability)
    } else {
        Err(ScoringError::InvalidProbability(probability))
    }
}
