#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Model {
    /// Serialized classifier loaded once at startup.
    pub path: PathBuf,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            path: PathBuf::from("models/f1_team_winner_model.json"),
        }
    }
}
