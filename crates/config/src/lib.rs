#![forbid(unsafe_code)]

mod display;
mod error;
mod model;
mod output_format;
mod race;

pub use display::{BAR_WIDTH_RANGE, Display, TOP_RANGE};
pub use error::Error;
pub use model::Model;
pub use output_format::OutputFormat;
pub use race::Race;

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub model: Model,
    pub display: Display,
    pub race: Race,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a TOML file layered over the defaults.
    ///
    /// Keys missing from the file keep their default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_owned()));
        }
        let mut config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file_exact(path))
            .extract()?;
        config.display = config.display.clamp();
        Ok(config)
    }

    /// Render the configuration as a TOML document.
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml_edit::ser::to_string_pretty(self)?)
    }
}
