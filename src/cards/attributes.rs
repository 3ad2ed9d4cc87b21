//! Comparable card attributes.
//!
//! A match is played on exactly one attribute, fixed in `MatchConfig`.
//! Every attribute is "higher wins" except `Density`, where the less
//! crowded city takes the round.
//!
//! ## Attribute Codes
//!
//! Attributes also carry a stable numeric code (1-5). Code-based lookups
//! are total: an unknown code names itself "Unknown attribute" and
//! compares as a tie.

use serde::{Deserialize, Serialize};

/// Label returned for codes outside 1-5.
pub const UNKNOWN_ATTRIBUTE: &str = "Unknown attribute";

/// Which way an attribute is won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// The larger value wins.
    HigherWins,
    /// The smaller value wins.
    LowerWins,
}

/// Attribute a match is decided on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Population,
    Area,
    Gdp,
    TouristSpots,
    Density,
}

impl Attribute {
    /// All attributes in code order.
    pub const ALL: [Attribute; 5] = [
        Attribute::Population,
        Attribute::Area,
        Attribute::Gdp,
        Attribute::TouristSpots,
        Attribute::Density,
    ];

    /// Look up an attribute by its numeric code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Attribute::Population),
            2 => Some(Attribute::Area),
            3 => Some(Attribute::Gdp),
            4 => Some(Attribute::TouristSpots),
            5 => Some(Attribute::Density),
            _ => None,
        }
    }

    /// Get the numeric code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Attribute::Population => 1,
            Attribute::Area => 2,
            Attribute::Gdp => 3,
            Attribute::TouristSpots => 4,
            Attribute::Density => 5,
        }
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Attribute::Density => Direction::LowerWins,
            _ => Direction::HigherWins,
        }
    }

    /// Human-readable label including the winning direction.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Attribute::Population => "Population (higher wins)",
            Attribute::Area => "Area (higher wins)",
            Attribute::Gdp => "GDP (higher wins)",
            Attribute::TouristSpots => "Tourist spots (higher wins)",
            Attribute::Density => "Density (LOWER wins)",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Label for a raw attribute code, with a fallback for unknown codes.
#[must_use]
pub fn label_for_code(code: u8) -> &'static str {
    Attribute::from_code(code).map_or(UNKNOWN_ATTRIBUTE, Attribute::label)
}
