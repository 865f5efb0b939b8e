use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Predict(#[from] predictor::Error),

    #[error("Failed to render config: {0}")]
    Config(#[from] config::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("Failed to encode forecast: {0}")]
    Json(#[from] serde_json::Error),
}
