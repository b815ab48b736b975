//! Seasons, weather, and the day-cycle season clock.

use crate::constants::SEASON_LENGTH_DAYS;
use serde::{Deserialize, Serialize};

/// The four seasons of the world calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Base growth multiplier for this season.
    ///
    /// Winter is zero for ordinary deciduous species; the evergreen and
    /// cold-hardy overrides live in [`crate::growth::calc_growth_rate`].
    pub fn growth_mult(self) -> f32 {
        match self {
            Season::Spring => 1.5,
            Season::Summer => 1.0,
            Season::Autumn => 0.8,
            Season::Winter => 0.0,
        }
    }

    /// Parse a season name from an external clock. Unknown names behave
    /// as summer (neutral multiplier), never an error.
    pub fn parse(name: &str) -> Season {
        match name.to_ascii_lowercase().as_str() {
            "spring" => Season::Spring,
            "autumn" | "fall" => Season::Autumn,
            "winter" => Season::Winter,
            _ => Season::Summer,
        }
    }

    /// The season that follows this one on the calendar.
    pub fn next(self) -> Season {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Autumn,
            Season::Autumn => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }
}

/// Season for a given day since world start (fixed four-season cycle).
pub fn season_for_day(day: u64) -> Season {
    match (day / SEASON_LENGTH_DAYS) % 4 {
        0 => Season::Spring,
        1 => Season::Summer,
        2 => Season::Autumn,
        _ => Season::Winter,
    }
}

/// Weather states supplied by an external weather system.
///
/// The growth sweep only consumes the multiplier, so callers with their
/// own weather model can feed any float instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    Clear,
    Rain,
    Overcast,
    Drought,
}

impl Weather {
    /// Growth multiplier for this weather state.
    pub fn growth_mult(self) -> f32 {
        match self {
            Weather::Clear => 1.0,
            Weather::Rain => 1.25,
            Weather::Overcast => 0.9,
            Weather::Drought => 0.5,
        }
    }
}
