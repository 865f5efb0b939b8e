#![forbid(unsafe_code)]

use predictor::domain::{self, CompetitorId};
use predictor::prediction::{RaceParams, RacePredictor};
use predictor::scoring::{ModelArtifact, ModelCache, ModelLoadError, Scorer, load_model};
use std::path::{Path, PathBuf};

fn bundled_model() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../models/f1_team_winner_model.json")
}

fn race(precipitation: f64) -> RaceParams {
    RaceParams {
        venue: domain::venue_by_name("Monaco Grand Prix").unwrap().id,
        year: 2024,
        round: 1,
        temperature: 25.0,
        precipitation,
        windspeed: 10.0,
    }
}

#[test]
fn bundled_model_ranks_monaco() {
    let model = load_model(bundled_model()).unwrap();
    assert_eq!(model.kind(), "tree_ensemble");

    let forecast = RacePredictor::new(&model).forecast(&race(0.0)).unwrap();
    let podium: Vec<_> = forecast
        .ranking
        .top(3)
        .iter()
        .map(|r| r.competitor_name)
        .collect();
    assert_eq!(podium, ["Red Bull", "Mercedes", "Ferrari"]);
}

#[test]
fn bundled_model_reacts_to_rain() {
    let model = load_model(bundled_model()).unwrap();
    let mercedes = race(0.0).feature_row(CompetitorId(131));
    let wet = race(12.0).feature_row(CompetitorId(131));
    assert!(model.predict_proba(&wet).unwrap() > model.predict_proba(&mercedes).unwrap());
}

#[test]
fn logistic_model_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logistic.json");
    std::fs::write(
        &path,
        r#"{"logistic": {
            "intercept": -3.0,
            "weights": {"temperature": 0.02},
            "competitor_offsets": {"6": 2.5, "9": 1.0}
        }}"#,
    )
    .unwrap();

    let model = load_model(&path).unwrap();
    assert!(matches!(model, ModelArtifact::Logistic(_)));
    let forecast = RacePredictor::new(&model).forecast(&race(0.0)).unwrap();
    assert_eq!(forecast.ranking.leader().unwrap().competitor_name, "Ferrari");
}

#[test]
fn load_errors_are_classified() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    assert!(matches!(load_model(&missing), Err(ModelLoadError::Io { .. })));

    let garbage = dir.path().join("garbage.json");
    std::fs::write(&garbage, "not json").unwrap();
    assert!(matches!(load_model(&garbage), Err(ModelLoadError::Parse { .. })));

    let dangling = dir.path().join("dangling.json");
    std::fs::write(
        &dangling,
        r#"{"tree_ensemble": {"trees": [{"nodes": [
            {"split": {"feature": "windspeed", "threshold": 5.0, "left": 1, "right": 7}},
            {"leaf": {"value": 0.1}}
        ]}]}}"#,
    )
    .unwrap();
    let err = load_model(&dangling).unwrap_err();
    assert!(matches!(err, ModelLoadError::Invalid { .. }));
    assert!(err.to_string().contains("child 7"));
}

#[test]
fn cache_loads_once_and_retries_after_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    let cache = ModelCache::new(&path);

    assert!(cache.get().is_err());
    assert!(!cache.is_loaded());

    std::fs::copy(bundled_model(), &path).unwrap();
    let first = cache.get().unwrap() as *const ModelArtifact;
    assert!(cache.is_loaded());

    // Later edits to the file are not observed by a loaded cache.
    std::fs::write(&path, "not json").unwrap();
    let second = cache.get().unwrap() as *const ModelArtifact;
    assert_eq!(first, second);
}

#[test]
fn cache_path_comes_from_config() {
    let mut config = config::Config::new();
    config.model.path = bundled_model();
    let cache = ModelCache::from_config(&config);
    assert_eq!(cache.path(), bundled_model());
    assert!(cache.get().is_ok());
}
