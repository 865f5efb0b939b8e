#![forbid(unsafe_code)]

//! Static reference data: the competitors that get scored and the venues a
//! race can be held at. Both tables are compiled in and never change.

mod competitor;
mod ids;
mod venue;

pub use competitor::Competitor;
pub use ids::{CompetitorId, VenueId};
pub use venue::Venue;

use crate::Error;
use competitor::COMPETITORS;
use venue::VENUES;

pub fn competitors() -> &'static [Competitor] {
    &COMPETITORS
}

pub fn venues() -> &'static [Venue] {
    &VENUES
}

/// Resolve a venue by its exact display name.
pub fn venue_by_name(name: &str) -> Result<&'static Venue, Error> {
    VENUES
        .iter()
        .find(|venue| venue.name == name)
        .ok_or_else(|| Error::VenueNotFound(name.to_owned()))
}

pub fn venue_by_id(id: VenueId) -> Option<&'static Venue> {
    VENUES.iter().find(|venue| venue.id == id)
}

/// Resolve a competitor by its exact display name.
pub fn competitor_by_name(name: &str) -> Result<&'static Competitor, Error> {
    COMPETITORS
        .iter()
        .find(|competitor| competitor.name == name)
        .ok_or_else(|| Error::CompetitorNotFound(name.to_owned()))
}

pub fn competitor_by_id(id: CompetitorId) -> Option<&'static Competitor> {
    COMPETITORS.iter().find(|competitor| competitor.id == id)
}
