#![forbid(unsafe_code)]

mod features;
mod params;
mod predictor;
mod types;

pub use features::{Feature, FeatureRow};
pub use params::{
    PRECIPITATION_RANGE, ROUND_RANGE, RaceParams, TEMPERATURE_RANGE, ValidationError,
    WINDSPEED_RANGE, YEAR_RANGE,
};
pub use predictor::RacePredictor;
pub use types::{Forecast, PredictionResult};
