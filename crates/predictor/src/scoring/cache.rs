#![forbid(unsafe_code)]

use super::artifact::{ModelArtifact, ModelLoadError, load_model};
use config::Config;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

/// Loads the model on first use and hands out the same instance afterwards.
///
/// A failed load leaves the cache empty, so the error is reported again on
/// the next access.
#[derive(Debug)]
pub struct ModelCache {
    path: PathBuf,
    model: OnceLock<ModelArtifact>,
}

impl ModelCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            model: OnceLock::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.model.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.model.get().is_some()
    }

    pub fn get(&self) -> Result<&ModelArtifact, ModelLoadError> {
        if let Some(model) = self.model.get() {
            debug!(path = %self.path.display(), "model cache hit");
            return Ok(model);
        }
        let model = load_model(&self.path)?;
        Ok(self.model.get_or_init(|| model))
    }
}
