//! City cards.
//!
//! A `Card` is built once from everything the player typed in and never
//! changes afterwards. Density is derived at build time, so it always
//! agrees with population and area.
//!
//! ## Example
//!
//! ```
//! use city_trunfo::cards::Card;
//!
//! let card = Card::builder("A01", "RO", "Ji-Parana")
//!     .population(100_000)
//!     .area(500.0)
//!     .build();
//!
//! assert_eq!(card.density(), 200.0);
//! ```

use serde::Serialize;

/// Population per km², or 0 when the area is not positive.
///
/// A zero density means "no valid density"; it is not an error.
#[must_use]
pub fn population_density(population: i64, area: f64) -> f64 {
    if area > 0.0 {
        population as f64 / area
    } else {
        0.0
    }
}

/// A city card.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Card {
    state: String,
    code: String,
    city: String,
    population: i64,
    area: f64,
    gdp: f64,
    tourist_spots: u32,
    density: f64,
}

impl Card {
    /// Start building a card from its identifying text.
    pub fn builder(
        code: impl Into<String>,
        state: impl Into<String>,
        city: impl Into<String>,
    ) -> CardBuilder {
        CardBuilder {
            state: state.into(),
            code: code.into(),
            city: city.into(),
            population: 0,
            area: 0.0,
            gdp: 0.0,
            tourist_spots: 0,
        }
    }

    /// Two-letter state code.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Card identifier, e.g. "A01".
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Inhabitants.
    #[must_use]
    pub fn population(&self) -> i64 {
        self.population
    }

    /// Area in km².
    #[must_use]
    pub fn area(&self) -> f64 {
        self.area
    }

    #[must_use]
    pub fn gdp(&self) -> f64 {
        self.gdp
    }

    #[must_use]
    pub fn tourist_spots(&self) -> u32 {
        self.tourist_spots
    }

    /// Inhabitants per km² (0 when area ≤ 0).
    #[must_use]
    pub fn density(&self) -> f64 {
        self.density
    }
}

/// Builder for `Card`. Density is computed in `build`.
#[derive(Clone, Debug)]
pub struct CardBuilder {
    state: String,
    code: String,
    city: String,
    population: i64,
    area: f64,
    gdp: f64,
    tourist_spots: u32,
}

impl CardBuilder {
    #[must_use]
    pub fn population(mut self, population: i64) -> Self {
        self.population = population;
        self
    }

    #[must_use]
    pub fn area(mut self, area: f64) -> Self {
        self.area = area;
        self
    }

    #[must_use]
    pub fn gdp(mut self, gdp: f64) -> Self {
        self.gdp = gdp;
        self
    }

    #[must_use]
    pub fn tourist_spots(mut self, count: u32) -> Self {
        self.tourist_spots = count;
        self
    }

    /// Finish the card, deriving its density.
    #[must_use]
    pub fn build(self) -> Card {
        Card {
            density: population_density(self.population, self.area),
            state: self.state,
            code: self.code,
            city: self.city,
            population: self.population,
            area: self.area,
            gdp: self.gdp,
            tourist_spots: self.tourist_spots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_positive_area() {
        assert_eq!(population_density(100_000, 500.0), 200.0);
        assert_eq!(population_density(80_000, 800.0), 100.0);
    }

    #[test]
    fn test_density_guard() {
        assert_eq!(population_density(123_456, 0.0), 0.0);
        assert_eq!(population_density(123_456, -10.0), 0.0);
    }

    #[test]
    fn test_card_builder() {
        let card = Card::builder("B02", "SP", "Campinas")
            .population(1_139_047)
            .area(794.57)
            .gdp(65.3)
            .tourist_spots(12)
            .build();

        assert_eq!(card.code(), "B02");
        assert_eq!(card.state(), "SP");
        assert_eq!(card.city(), "Campinas");
        assert_eq!(card.population(), 1_139_047);
        assert_eq!(card.gdp(), 65.3);
        assert_eq!(card.tourist_spots(), 12);
        assert!((card.density() - 1_139_047.0 / 794.57).abs() < 1e-9);
    }

    #[test]
    fn test_zero_area_card() {
        let card = Card::builder("C03", "AM", "Nowhere")
            .population(50_000)
            .build();
        assert_eq!(card.area(), 0.0);
        assert_eq!(card.density(), 0.0);
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::builder("A01", "RO", "Ji-Parana")
            .population(100_000)
            .area(500.0)
            .build();

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["code"], "A01");
        assert_eq!(json["density"], 200.0);
    }
}
