#![forbid(unsafe_code)]

use super::VenueId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: &'static str,
}

impl Venue {
    const fn new(id: u32, name: &'static str) -> Self {
        Self {
            id: VenueId(id),
            name,
        }
    }
}

/// Circuits the model was trained on, sorted by display name.
pub(super) static VENUES: [Venue; 24] = [
    Venue::new(24, "Abu Dhabi Grand Prix"),
    Venue::new(1, "Australian Grand Prix"),
    Venue::new(70, "Austrian Grand Prix"),
    Venue::new(73, "Azerbaijan Grand Prix"),
    Venue::new(3, "Bahrain Grand Prix"),
    Venue::new(13, "Belgian Grand Prix"),
    Venue::new(18, "Brazilian Grand Prix"),
    Venue::new(9, "British Grand Prix"),
    Venue::new(7, "Canadian Grand Prix"),
    Venue::new(17, "Chinese Grand Prix"),
    Venue::new(21, "Emilia Romagna Grand Prix"),
    Venue::new(34, "French Grand Prix"),
    Venue::new(11, "Hungarian Grand Prix"),
    Venue::new(14, "Italian Grand Prix"),
    Venue::new(22, "Japanese Grand Prix"),
    Venue::new(80, "Las Vegas Grand Prix"),
    Venue::new(32, "Mexican Grand Prix"),
    Venue::new(79, "Miami Grand Prix"),
    Venue::new(6, "Monaco Grand Prix"),
    Venue::new(78, "Qatar Grand Prix"),
    Venue::new(77, "Saudi Arabian Grand Prix"),
    Venue::new(15, "Singapore Grand Prix"),
    Venue::new(4, "Spanish Grand Prix"),
    Venue::new(69, "United States Grand Prix"),
];
