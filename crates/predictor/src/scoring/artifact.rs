#![forbid(unsafe_code)]

use super::logistic::LogisticModel;
use super::scorer::{Scorer, ScoringError};
use super::tree::TreeEnsemble;
use crate::prediction::FeatureRow;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("failed to read model {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid model {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },
}

/// A serialized classifier, stored as JSON keyed by its kind:
///
/// ```json
/// {"tree_ensemble": {"base_score": -2.5, "trees": [{"nodes": [{"leaf": {"value": 0.1}}]}]}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelArtifact {
    Logistic(LogisticModel),
    TreeEnsemble(TreeEnsemble),
}

impl ModelArtifact {
    pub fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::Logistic(_) => "logistic",
            ModelArtifact::TreeEnsemble(_) => "tree_ensemble",
        }
    }

    /// Structural checks that parsing alone cannot express.
    pub fn check(&self) -> Result<(), String> {
        match self {
            ModelArtifact::Logistic(model) => model.check(),
            ModelArtifact::TreeEnsemble(model) => model.check(),
        }
    }
}

impl Scorer for ModelArtifact {
    fn predict_proba(&self, row: &FeatureRow) -> Result<f64, ScoringError> {
        match self {
            ModelArtifact::Logistic(model) => model.predict_proba(row),
            ModelArtifact::TreeEnsemble(model) => model.predict_proba(row),
        }
    }
}

/// Read, parse and check a model file.
pub fn load_model(path: impl AsRef<Path>) -> Result<ModelArtifact, ModelLoadError> {
    let path = path.as_ref();
    let started = Instant::now();

    let file = File::open(path).map_err(|source| ModelLoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    let model: ModelArtifact =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            ModelLoadError::Parse {
                path: path.to_owned(),
                source,
            }
        })?;
    model.check().map_err(|reason| ModelLoadError::Invalid {
        path: path.to_owned(),
        reason,
    })?;

    info!(
        path = %path.display(),
        kind = model.kind(),
        elapsed = ?started.elapsed(),
        "model loaded"
    );
    Ok(model)
}
