//! # city-trunfo
//!
//! A two-card "Super Trunfo" game about cities, played in the terminal.
//!
//! ## How a Match Works
//!
//! 1. Each player types in a city card: state, code, city name,
//!    population, area, GDP and number of tourist spots.
//! 2. Population density is derived from population and area.
//! 3. Both cards are printed, then compared on one attribute fixed in
//!    `MatchConfig`.
//! 4. The higher value wins, except for density where the lower value wins.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, logger setup
//! - `cards`: Card record, attributes, input fields
//! - `rules`: Card comparison and verdicts
//! - `terminal`: Card entry and rendering over any `BufRead` / `Write`
//! - `game`: A full match from banner to verdict

pub mod core;
pub mod cards;
pub mod rules;
pub mod terminal;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Error, ParseError, Result,
    MatchConfig, TextLimits, OverflowPolicy, InvalidInputPolicy,
};

pub use crate::cards::{Attribute, Card, CardBuilder, Field, population_density};

pub use crate::rules::{compare, Verdict};

pub use crate::game::{run, MatchOutcome};
