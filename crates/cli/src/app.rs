use crate::cli::{Command, PredictArgs};
use crate::error::Error;
use config::{Config, OutputFormat};
use predictor::domain;
use predictor::prediction::{Forecast, RacePredictor};
use predictor::render::{BarChart, Cards, Table};
use predictor::scoring::ModelCache;
use std::io::Write;
use tracing::{debug, info};

/// Run one command, writing its output to `out`.
pub fn run(command: &Command, config: &Config, out: &mut impl Write) -> Result<(), Error> {
    match command {
        Command::Predict(args) => predict(args, config, out),
        Command::Venues => {
            for venue in domain::venues() {
                writeln!(out, "{:>3}  {}", venue.id, venue.name)?;
            }
            Ok(())
        }
        Command::Teams => {
            for competitor in domain::competitors() {
                writeln!(out, "{:>3}  {}", competitor.id, competitor.name)?;
            }
            Ok(())
        }
        Command::Config => {
            write!(out, "{}", config.to_toml()?)?;
            Ok(())
        }
    }
}

fn predict(args: &PredictArgs, config: &Config, out: &mut impl Write) -> Result<(), Error> {
    let venue = domain::venue_by_name(&args.venue)?;
    let race = args.race_params(venue.id, &config.race);
    let display_settings = args.display(&config.display);
    debug!(?race, display = ?display_settings, "resolved prediction request");

    let models = ModelCache::new(args.model_path(&config.model));
    let model = models.get().map_err(predictor::Error::from)?;

    let forecast = RacePredictor::new(model).forecast(&race)?;
    if let Some(leader) = forecast.ranking.leader() {
        info!(
            venue = venue.name,
            leader = leader.competitor_name,
            probability = leader.probability,
            "forecast ready"
        );
    }

    match display_settings.format {
        OutputFormat::Text => write_text(&forecast, &display_settings, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &forecast)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn write_text(
    forecast: &Forecast,
    display: &config::Display,
    out: &mut impl Write,
) -> Result<(), Error> {
    let ranking = &forecast.ranking;
    writeln!(out, "{}", Cards::new(ranking, forecast.venue.name, display.top))?;
    writeln!(out, "{}", Table::new(ranking))?;
    write!(out, "{}", BarChart::new(ranking, display.bar_width))?;
    Ok(())
}
