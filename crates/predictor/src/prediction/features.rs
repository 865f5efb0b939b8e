#![forbid(unsafe_code)]

use crate::domain::{CompetitorId, VenueId};
use serde::{Deserialize, Serialize};

/// Columns of the model's input schema, named as in the training data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Feature {
    #[serde(rename = "year_x")]
    Year,
    #[serde(rename = "round_x")]
    Round,
    #[serde(rename = "temperature")]
    Temperature,
    #[serde(rename = "precipitation")]
    Precipitation,
    #[serde(rename = "windspeed")]
    Windspeed,
    #[serde(rename = "circuitId")]
    VenueId,
    #[serde(rename = "constructorId")]
    CompetitorId,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::Year,
        Feature::Round,
        Feature::Temperature,
        Feature::Precipitation,
        Feature::Windspeed,
        Feature::VenueId,
        Feature::CompetitorId,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Feature::Year => "year_x",
            Feature::Round => "round_x",
            Feature::Temperature => "temperature",
            Feature::Precipitation => "precipitation",
            Feature::Windspeed => "windspeed",
            Feature::VenueId => "circuitId",
            Feature::CompetitorId => "constructorId",
        }
    }
}

/// One fixed-schema input row for a single competitor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureRow {
    pub year: i32,
    pub round: u32,
    pub temperature: f64,
    pub precipitation: f64,
    pub windspeed: f64,
    pub venue: VenueId,
    pub competitor: CompetitorId,
}

impl FeatureRow {
    /// Numeric value of a column, the way a tabular model sees it.
    pub fn value(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Year => f64::from(self.year),
            Feature::Round => f64::from(self.round),
            Feature::Temperature => self.temperature,
            Feature::Precipitation => self.precipitation,
            Feature::Windspeed => self.windspeed,
            Feature::VenueId => f64::from(self.venue.0),
            Feature::CompetitorId => f64::from(self.competitor.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_names_match_schema_names() {
        for feature in Feature::ALL {
            let json = serde_json::to_string(&feature).unwrap();
            assert_eq!(json, format!("\"{}\"", feature.name()));
            assert_eq!(serde_json::from_str::<Feature>(&json).unwrap(), feature);
        }
    }

    #[test]
    fn ids_are_exposed_as_numbers() {
        let row = FeatureRow {
            year: 2024,
            round: 3,
            temperature: 18.5,
            precipitation: 1.2,
            windspeed: 7.0,
            venue: VenueId(6),
            competitor: CompetitorId(214),
        };
        assert_eq!(row.value(Feature::Year), 2024.0);
        assert_eq!(row.value(Feature::Round), 3.0);
        assert_eq!(row.value(Feature::VenueId), 6.0);
        assert_eq!(row.value(Feature::CompetitorId), 214.0);
        assert_eq!(row.value(Feature::Precipitation), 1.2);
    }
}
