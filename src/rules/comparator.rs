//! Card comparison.
//!
//! `compare` is a pure function of two cards and an attribute. Equal
//! values are a tie; there is no tie-breaker attribute.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Attribute, Card, Direction};

/// Outcome of comparing two cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The first card wins.
    FirstWins,
    /// The second card wins.
    SecondWins,
    /// Neither card wins.
    Tie,
}

impl Verdict {
    /// Verdict for a "higher wins" ordering of first against second.
    ///
    /// `None` (incomparable floats) is a tie.
    #[must_use]
    pub fn from_ordering(ordering: Option<Ordering>) -> Self {
        match ordering {
            Some(Ordering::Greater) => Verdict::FirstWins,
            Some(Ordering::Less) => Verdict::SecondWins,
            Some(Ordering::Equal) | None => Verdict::Tie,
        }
    }

    /// Swap the winner. A tie stays a tie.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Verdict::FirstWins => Verdict::SecondWins,
            Verdict::SecondWins => Verdict::FirstWins,
            Verdict::Tie => Verdict::Tie,
        }
    }

    /// The winning card, if any.
    #[must_use]
    pub fn winner<'a>(self, first: &'a Card, second: &'a Card) -> Option<&'a Card> {
        match self {
            Verdict::FirstWins => Some(first),
            Verdict::SecondWins => Some(second),
            Verdict::Tie => None,
        }
    }
}

/// Compare two cards on one attribute.
#[must_use]
pub fn compare(first: &Card, second: &Card, attribute: Attribute) -> Verdict {
    let ordering = match attribute {
        Attribute::Population => Some(first.population().cmp(&second.population())),
        Attribute::Area => first.area().partial_cmp(&second.area()),
        Attribute::Gdp => first.gdp().partial_cmp(&second.gdp()),
        Attribute::TouristSpots => Some(first.tourist_spots().cmp(&second.tourist_spots())),
        Attribute::Density => first.density().partial_cmp(&second.density()),
    };

    let verdict = Verdict::from_ordering(ordering);
    match attribute.direction() {
        Direction::HigherWins => verdict,
        Direction::LowerWins => verdict.reversed(),
    }
}

/// Compare on a raw attribute code. Unknown codes are a tie.
#[must_use]
pub fn compare_by_code(first: &Card, second: &Card, code: u8) -> Verdict {
    Attribute::from_code(code).map_or(Verdict::Tie, |attr| compare(first, second, attr))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(code: &str, population: i64, area: f64) -> Card {
        Card::builder(code, "RO", format!("City {}", code))
            .population(population)
            .area(area)
            .gdp(10.0)
            .tourist_spots(5)
            .build()
    }

    #[test]
    fn test_lower_density_wins() {
        let a = city("A01", 100_000, 500.0);
        let b = city("B01", 80_000, 800.0);
        assert_eq!(a.density(), 200.0);
        assert_eq!(b.density(), 100.0);
        assert_eq!(compare(&a, &b, Attribute::Density), Verdict::SecondWins);
        assert_eq!(compare(&b, &a, Attribute::Density), Verdict::FirstWins);
    }

    #[test]
    fn test_higher_population_wins() {
        let a = city("A01", 500_000, 100.0);
        let b = city("B01", 300_000, 100.0);
        assert_eq!(compare(&a, &b, Attribute::Population), Verdict::FirstWins);
    }

    #[test]
    fn test_equal_population_ties() {
        let a = city("A01", 300_000, 100.0);
        let b = city("B01", 300_000, 900.0);
        assert_eq!(compare(&a, &b, Attribute::Population), Verdict::Tie);
    }

    #[test]
    fn test_area_and_gdp() {
        let a = city("A01", 1, 10.0);
        let b = Card::builder("B01", "SP", "Other")
            .area(20.0)
            .gdp(1.5)
            .tourist_spots(9)
            .build();
        assert_eq!(compare(&a, &b, Attribute::Area), Verdict::SecondWins);
        assert_eq!(compare(&a, &b, Attribute::Gdp), Verdict::FirstWins);
        assert_eq!(compare(&a, &b, Attribute::TouristSpots), Verdict::SecondWins);
    }

    #[test]
    fn test_zero_area_density_beats_any_positive_density() {
        let empty = city("A01", 1_000_000, 0.0);
        let crowded = city("B01", 10, 1.0);
        assert_eq!(compare(&empty, &crowded, Attribute::Density), Verdict::FirstWins);
    }

    #[test]
    fn test_unknown_code_is_tie() {
        let a = city("A01", 500_000, 100.0);
        let b = city("B01", 300_000, 100.0);
        assert_eq!(compare_by_code(&a, &b, 1), Verdict::FirstWins);
        assert_eq!(compare_by_code(&a, &b, 0), Verdict::Tie);
        assert_eq!(compare_by_code(&a, &b, 99), Verdict::Tie);
    }

    #[test]
    fn test_winner() {
        let a = city("A01", 2, 1.0);
        let b = city("B01", 1, 1.0);
        assert_eq!(Verdict::FirstWins.winner(&a, &b).map(Card::code), Some("A01"));
        assert_eq!(Verdict::SecondWins.winner(&a, &b).map(Card::code), Some("B01"));
        assert!(Verdict::Tie.winner(&a, &b).is_none());
    }

    #[test]
    fn test_incomparable_is_tie() {
        assert_eq!(Verdict::from_ordering(None), Verdict::Tie);
        assert_eq!(Verdict::from_ordering(None).reversed(), Verdict::Tie);
    }
}
