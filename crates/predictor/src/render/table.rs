#![forbid(unsafe_code)]

use super::format_percent;
use crate::ranking::Ranking;
use std::fmt;

const TEAM: &str = "Team";
const PROBABILITY: &str = "Win Probability";

/// Every competitor with its formatted probability, in rank order.
pub struct Table<'a> {
    ranking: &'a Ranking,
}

impl<'a> Table<'a> {
    pub fn new(ranking: &'a Ranking) -> Self {
        Self { ranking }
    }
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_width = self
            .ranking
            .iter()
            .map(|r| r.competitor_name.chars().count())
            .chain([TEAM.len()])
            .max()
            .unwrap_or(TEAM.len());
        let prob_width = PROBABILITY.len();

        writeln!(f, "All Teams")?;
        writeln!(f, "{:>4}  {TEAM:<name_width$}  {PROBABILITY:>prob_width$}", "#")?;
        writeln!(f, "{}", "-".repeat(4 + 2 + name_width + 2 + prob_width))?;
        for (ix, result) in self.ranking.iter().enumerate() {
            writeln!(
                f,
                "{:>4}  {:<name_width$}  {:>prob_width$}",
                ix + 1,
                result.competitor_name,
                format_percent(result.probability),
            )?;
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

    #[test]
    fn aligns_columns() {
        let ranking = Ranking::new(
            competitors()
                .iter()
                .zip([0.125, 0.6, 0.0])
                .map(|(c, p)| PredictionResult::new(c, p))
                .collect(),
        );
        let expected = "\
All Teams
   #  Team      Win Probability
-------------------------------
   1  Ferrari             60.0%
   2  Mercedes            12.5%
   3  Red Bull             0.0%
";
        assert_eq!(Table::new(&ranking).to_string(), expected);
    }
}
