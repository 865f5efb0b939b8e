#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Race parameters used when the command line leaves them out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Race {
    pub year: i32,
    pub round: u32,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Millimetres.
    pub precipitation: f64,
    /// Kilometres per hour.
    pub windspeed: f64,
}

impl Default for Race {
    fn default() -> Self {
        Self {
            year: 2024,
            round: 1,
            temperature: 25.0,
            precipitation: 0.0,
            windspeed: 10.0,
        }
    }
}
