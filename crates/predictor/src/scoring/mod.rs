#![forbid(unsafe_code)]

//! Scoring backends. Anything implementing [`Scorer`] can stand in for the
//! trained model; the file-backed models live in [`ModelArtifact`].

mod artifact;
mod cache;
mod logistic;
mod scorer;
mod tree;

pub use artifact::{ModelArtifact, ModelLoadError, load_model};
pub use cache::ModelCache;
pub use logistic::LogisticModel;
pub use scorer::{Scorer, ScoringError};
pub use tree::{Node, Tree, TreeEnsemble};
