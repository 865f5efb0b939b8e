#![forbid(unsafe_code)]

use crate::domain::{CompetitorId, VenueId};
use crate::prediction::FeatureRow;
use serde::Serialize;
use std::ops::RangeInclusive;

pub const YEAR_RANGE: RangeInclusive<i32> = 2020..=2030;
pub const ROUND_RANGE: RangeInclusive<u32> = 1..=24;
/// Degrees Celsius.
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = -10.0..=50.0;
/// Millimetres.
pub const PRECIPITATION_RANGE: RangeInclusive<f64> = 0.0..=100.0;
/// Kilometres per hour.
pub const WINDSPEED_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// A race parameter outside its accepted range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{field} must be within {min}..={max}, got {value}")]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// Everything about a race that is shared by all competitors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RaceParams {
    pub venue: VenueId,
    pub year: i32,
    pub round: u32,
    pub temperature: f64,
    pub precipitation: f64,
    pub windspeed: f64,
}

impl RaceParams {
    /// Reject out-of-range or non-finite values before anything gets scored.
    /// All bounds are inclusive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check(
            "year",
            f64::from(self.year),
            f64::from(*YEAR_RANGE.start())..=f64::from(*YEAR_RANGE.end()),
        )?;
        check(
            "round",
            f64::from(self.round),
            f64::from(*ROUND_RANGE.start())..=f64::from(*ROUND_RANGE.end()),
        )?;
        check("temperature", self.temperature, TEMPERATURE_RANGE)?;
        check("precipitation", self.precipitation, PRECIPITATION_RANGE)?;
        check("windspeed", self.windspeed, WINDSPEED_RANGE)?;
        Ok(())
    }

    pub fn feature_row(&self, competitor: CompetitorId) -> FeatureRow {
        FeatureRow {
            year: self.year,
            round: self.round,
            temperature: self.temperature,
            precipitation: self.precipitation,
            windspeed: self.windspeed,
            venue: self.venue,
            competitor,
        }
    }
}

fn check(
    field: &'static str,
    value: f64,
    range: RangeInclusive<f64>,
) -> Result<(), ValidationError> {
    // NaN fails `contains`, infinities fall outside every range.
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}
