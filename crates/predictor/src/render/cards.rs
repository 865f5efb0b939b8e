#![forbid(unsafe_code)]

use super::format_percent;
use crate::ranking::Ranking;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medal for a 1-based rank.
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Medal::Gold => "GOLD",
            Medal::Silver => "SILVER",
            Medal::Bronze => "BRONZE",
        }
    }
}

/// Highlighted view of the leading competitors.
pub struct Cards<'a> {
    ranking: &'a Ranking,
    venue: &'a str,
    top: usize,
}

impl<'a> Cards<'a> {
    pub fn new(ranking: &'a Ranking, venue: &'a str, top: usize) -> Self {
        Self {
            ranking,
            venue,
            top,
        }
    }
}

impl fmt::Display for Cards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.ranking.top(self.top);
        writeln!(f, "Top {} Predictions for {}", shown.len(), self.venue)?;
        for (ix, result) in shown.iter().enumerate() {
            let rank = ix + 1;
            let badge = Medal::for_rank(rank).map_or("", Medal::label);
            writeln!(f)?;
            writeln!(f, "  [{badge:^6}] {rank}. {}", result.competitor_name)?;
            writeln!(f, "           {}", format_percent(result.probability))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::competitors;
    use crate::prediction::PredictionResult;
    use pretty_assertions::assert_eq;

    fn ranking(probabilities: &[f64]) -> Ranking {
        Ranking::new(
            competitors()
                .iter()
                .zip(probabilities)
                .map(|(c, p)| PredictionResult::new(c, *p))
                .collect(),
        )
    }

    #[test]
    fn renders_medals_in_rank_order() {
        let ranking = ranking(&[0.31, 0.42, 0.8234, 0.05]);
        let text = Cards::new(&ranking, "Monaco Grand Prix", 3).to_string();
        let expected = "\
Top 3 Predictions for Monaco Grand Prix

  [ GOLD ] 1. Red Bull
           82.3%

  [SILVER] 2. Ferrari
           42.0%

  [BRONZE] 3. Mercedes
           31.0%
";
        assert_eq!(text, expected);
    }

    #[test]
    fn fewer_competitors_than_requested() {
        let ranking = ranking(&[0.5]);
        let text = Cards::new(&ranking, "Miami Grand Prix", 3).to_string();
        assert!(text.starts_with("Top 1 Predictions for Miami Grand Prix\n"));
        assert_eq!(text.matches("GOLD").count(), 1);
        assert!(!text.contains("SILVER"));
    }

    #[test]
    fn ranks_past_the_podium_have_no_medal() {
        let ranking = ranking(&[0.4, 0.3, 0.2, 0.1]);
        let text = Cards::new(&ranking, "Qatar Grand Prix", 4).to_string();
        assert!(text.contains("  [      ] 4. McLaren\n"));
    }
}
