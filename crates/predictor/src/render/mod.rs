#![forbid(unsafe_code)]

//! Text renderings of a [`Ranking`](crate::ranking::Ranking). Each view is a
//! small borrowed wrapper implementing [`std::fmt::Display`].

mod cards;
mod chart;
mod table;

pub use cards::{Cards, Medal};
pub use chart::{BarChart, bar_len};
pub use table::Table;

/// Probability as a percentage with one decimal place, e.g. `0.8234` -> `82.3%`.
pub fn format_percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}
