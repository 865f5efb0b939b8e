#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// How a forecast is written to stdout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Highlighted cards, ranked table and bar chart.
    #[default]
    Text,
    Json,
}
