//! Match rules.
//!
//! Two cards are compared on the configured attribute:
//! - Population, area, GDP and tourist spots: higher wins
//! - Density: lower wins
//! - Equal values: tie

pub mod comparator;

pub use comparator::{compare, compare_by_code, Verdict};
