use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use config::OutputFormat;
use predictor::domain::VenueId;
use predictor::prediction::{
    PRECIPITATION_RANGE, ROUND_RANGE, RaceParams, TEMPERATURE_RANGE, WINDSPEED_RANGE, YEAR_RANGE,
};
use std::fmt::Display;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Podium: F1 team win predictor
///
/// Scores every active constructor for a race with a pre-trained classifier
/// and shows them ranked by win probability.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, global = true, value_parser = validate_file)]
    pub conffile: Option<PathBuf>,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Predict the winner of a race.
    Predict(PredictArgs),
    /// List the circuits a race can be held at.
    Venues,
    /// List the constructors that get scored.
    Teams,
    /// Print the effective configuration as TOML.
    Config,
}

/// Race parameters. Anything left out comes from the `[race]` config section.
#[derive(Debug, Args, Clone)]
pub struct PredictArgs {
    /// Circuit name, as listed by `podium venues`.
    #[arg(long)]
    pub venue: String,

    #[arg(long, value_parser = validate_year)]
    pub year: Option<i32>,

    #[arg(long, value_parser = validate_round)]
    pub round: Option<u32>,

    /// Air temperature in degrees Celsius.
    #[arg(long, allow_negative_numbers = true, value_parser = validate_temperature)]
    pub temperature: Option<f64>,

    /// Precipitation in millimetres.
    #[arg(long, value_parser = validate_precipitation)]
    pub precipitation: Option<f64>,

    /// Wind speed in km/h.
    #[arg(long, value_parser = validate_windspeed)]
    pub windspeed: Option<f64>,

    /// Serialized model to score with, overriding `[model] path`.
    #[arg(short, long, value_parser = validate_file)]
    pub model: Option<PathBuf>,

    /// Number of highlighted entries.
    #[arg(long, value_parser = validate_top)]
    pub top: Option<usize>,

    #[arg(long, value_enum)]
    pub format: Option<Format>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl PredictArgs {
    /// Merge the flags over the configured defaults.
    pub fn race_params(&self, venue: VenueId, defaults: &config::Race) -> RaceParams {
        RaceParams {
            venue,
            year: self.year.unwrap_or(defaults.year),
            round: self.round.unwrap_or(defaults.round),
            temperature: self.temperature.unwrap_or(defaults.temperature),
            precipitation: self.precipitation.unwrap_or(defaults.precipitation),
            windspeed: self.windspeed.unwrap_or(defaults.windspeed),
        }
    }

    pub fn display(&self, defaults: &config::Display) -> config::Display {
        config::Display {
            top: self.top.unwrap_or(defaults.top),
            bar_width: defaults.bar_width,
            format: self.format.map_or(defaults.format, OutputFormat::from),
        }
        .clamp()
    }

    pub fn model_path(&self, defaults: &config::Model) -> PathBuf {
        self.model.clone().unwrap_or_else(|| defaults.path.clone())
    }
}

/// Check if the file exists.
#[inline(always)]
fn validate_file(file: &str) -> Result<PathBuf, String> {
    let path = Path::new(file);
    if path.exists() {
        Ok(path.to_owned())
    } else {
        Err(format!("File not found: {:?}", path))
    }
}

fn parse_within<T>(value: &str, range: RangeInclusive<T>) -> Result<T, String>
where
    T: FromStr + PartialOrd + Display,
{
    let parsed: T = value
        .parse()
        .map_err(|_| format!("`{value}` is not a valid number"))?;
    if range.contains(&parsed) {
        Ok(parsed)
    } else {
        Err(format!(
            "Must be between {} and {}",
            range.start(),
            range.end()
        ))
    }
}

fn validate_year(year: &str) -> Result<i32, String> {
    parse_within(year, YEAR_RANGE)
}

fn validate_round(round: &str) -> Result<u32, String> {
    parse_within(round, ROUND_RANGE)
}

fn validate_temperature(temperature: &str) -> Result<f64, String> {
    parse_within(temperature, TEMPERATURE_RANGE)
}

fn validate_precipitation(precipitation: &str) -> Result<f64, String> {
    parse_within(precipitation, PRECIPITATION_RANGE)
}

fn validate_windspeed(windspeed: &str) -> Result<f64, String> {
    parse_within(windspeed, WINDSPEED_RANGE)
}

fn validate_top(top: &str) -> Result<usize, String> {
    parse_within(top, config::TOP_RANGE)
}
