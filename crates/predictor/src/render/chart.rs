#![forbid(unsafe_code)]

use super::format_percent;
use crate::ranking::Ranking;
use std::fmt;

/// Headroom past the leading bar, leaving space for its label.
const AXIS_HEADROOM: f64 = 1.1;
const BAR: &str = "█";

/// Length in characters of a bar for `probability` on an axis running from
/// zero to `axis_max` over `width` characters.
pub fn bar_len(probability: f64, axis_max: f64, width: usize) -> usize {
    if axis_max <= 0.0 {
        return 0;
    }
    let len = (probability / axis_max * width as f64).round();
    (len.max(0.0) as usize).min(width)
}

/// Horizontal bar chart, highest probability on top.
pub struct BarChart<'a> {
    ranking: &'a Ranking,
    width: usize,
}

impl<'a> BarChart<'a> {
    pub fn new(ranking: &'a Ranking, width: usize) -> Self {
        Self { ranking, width }
    }

    /// Right end of the x axis.
    pub fn axis_max(&self) -> f64 {
        self.ranking.max_probability() * AXIS_HEADROOM
    }
}

impl fmt::Display for BarChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width;
        let axis_max = self.axis_max();
        let name_width = self
            .ranking
            .iter()
            .map(|r| r.competitor_name.chars().count())
            .max()
            .unwrap_or(0);

        writeln!(f, "Win Probabilities")?;
        for result in self.ranking {
            let bar = BAR.repeat(bar_len(result.probability, axis_max, width));
            writeln!(
                f,
                "{:<name_width$} |{bar} {}",
                result.competitor_name,
                format_percent(result.probability),
            )?;
        }
        writeln!(f, "{:name_width$} +{}", "", "-".repeat(width))?;
        writeln!(
            f,
            "{:name_width$}  {:<left$}{:>right$}",
            "",
            format_percent(0.0),
            format_percent(axis_max),
            left = width / 2,
            right = width - width / 2,
        )
    }
}
