//! Core types: configuration, errors and logging.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{InvalidInputPolicy, MatchConfig, OverflowPolicy, TextLimits, DEFAULT_ATTRIBUTE};
pub use error::{Error, ParseError, Result};
