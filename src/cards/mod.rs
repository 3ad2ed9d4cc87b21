//! Card system: city cards, their attributes and input fields.
//!
//! ## Key Types
//!
//! - `Card`: Immutable city record with derived density
//! - `Attribute`: The five comparable stats
//! - `Field`: The seven values typed in for a card

pub mod attributes;
pub mod card;
pub mod field;

pub use attributes::{label_for_code, Attribute, Direction, UNKNOWN_ATTRIBUTE};
pub use card::{population_density, Card, CardBuilder};
pub use field::Field;
