//! City "Super Trunfo": two players each enter a city card and the cards
//! are compared on a single configured attribute.
//!
//! - Population, area, GDP, tourist spots: the higher value wins
//! - Density: the lower value wins
//! - Exact equality is a tie

mod session;

pub use session::{run, MatchOutcome};
