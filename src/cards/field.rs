//! Input fields of a card, in the order they are collected.

use serde::{Deserialize, Serialize};

/// One of the seven values a player types in for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    State,
    Code,
    City,
    Population,
    Area,
    Gdp,
    TouristSpots,
}

impl Field {
    /// Every field in collection order.
    pub const ALL: [Field; 7] = [
        Field::State,
        Field::Code,
        Field::City,
        Field::Population,
        Field::Area,
        Field::Gdp,
        Field::TouristSpots,
    ];

    /// Short name used in log records and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Field::State => "state",
            Field::Code => "card code",
            Field::City => "city name",
            Field::Population => "population",
            Field::Area => "area",
            Field::Gdp => "GDP",
            Field::TouristSpots => "tourist spots",
        }
    }

    /// Prompt shown before reading the field.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Field::State => "State (2-letter code, e.g. RO): ",
            Field::Code => "Card code (e.g. A01): ",
            Field::City => "City name: ",
            Field::Population => "Population (inhabitants): ",
            Field::Area => "Area (km2): ",
            Field::Gdp => "GDP (same unit for both cards, e.g. billions): ",
            Field::TouristSpots => "Tourist spots (count): ",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_order() {
        assert_eq!(&Field::ALL[..3], &[Field::State, Field::Code, Field::City]);
        assert_eq!(Field::ALL[3], Field::Population);
        assert_eq!(Field::ALL[6], Field::TouristSpots);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Field::Gdp), "GDP");
        assert_eq!(Field::Area.prompt(), "Area (km2): ");
    }
}
