#![forbid(unsafe_code)]

use super::CompetitorId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: &'static str,
}

impl Competitor {
    const fn new(id: u32, name: &'static str) -> Self {
        Self {
            id: CompetitorId(id),
            name,
        }
    }
}

/// Active constructors, in the order results are reported before ranking.
pub(super) static COMPETITORS: [Competitor; 10] = [
    Competitor::new(131, "Mercedes"),
    Competitor::new(6, "Ferrari"),
    Competitor::new(9, "Red Bull"),
    Competitor::new(3, "McLaren"),
    Competitor::new(214, "Aston Martin"),
    Competitor::new(4, "Alpine F1 Team"),
    Competitor::new(51, "Alfa Romeo"),
    Competitor::new(213, "Haas F1 Team"),
    Competitor::new(5, "Williams"),
    Competitor::new(210, "AlphaTauri"),
];
