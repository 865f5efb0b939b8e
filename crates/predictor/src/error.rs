#![forbid(unsafe_code)]

use crate::prediction::ValidationError;
use crate::scoring::{ModelLoadError, ScoringError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The model could not be loaded. Nothing can be predicted in this session.
    #[error("model unavailable: {0}")]
    Configuration(#[from] ModelLoadError),

    #[error("invalid race parameters: {0}")]
    Validation(#[from] ValidationError),

    /// The scorer failed for one competitor, which fails the whole run.
    #[error("failed to score {competitor}: {source}")]
    Scoring {
        competitor: &'static str,
        #[source]
        source: ScoringError,
    },

    #[error("unknown venue: {0}")]
    VenueNotFound(String),

    #[error("unknown competitor: {0}")]
    CompetitorNotFound(String),
}
