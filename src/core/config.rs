//! Match configuration.
//!
//! A match is fully described by one `MatchConfig`:
//! - `attribute`: The stat the match is decided on
//! - `limits` / `overflow`: How long text fields may be and what happens
//!   to longer input
//! - `invalid_input`: What happens when a number cannot be parsed
//! - `log_level`: Verbosity of the stderr logger
//!
//! The binary plays with `MatchConfig::default()`.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::cards::{Attribute, Field};

/// Attribute compared when nothing else is configured.
pub const DEFAULT_ATTRIBUTE: Attribute = Attribute::Density;

/// Maximum length, in characters, of each text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLimits {
    pub state: usize,
    pub code: usize,
    pub city: usize,
}

impl TextLimits {
    /// Capacity for a text field. `None` for numeric fields.
    #[must_use]
    pub fn capacity(&self, field: Field) -> Option<usize> {
        match field {
            Field::State => Some(self.state),
            Field::Code => Some(self.code),
            Field::City => Some(self.city),
            Field::Population | Field::Area | Field::Gdp | Field::TouristSpots => None,
        }
    }
}

impl Default for TextLimits {
    fn default() -> Self {
        Self {
            state: 2,
            code: 7,
            city: 63,
        }
    }
}

/// What to do with text longer than its capacity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Keep the first `capacity` characters.
    #[default]
    Truncate,
    /// Fail with `Error::TextTooLong`.
    Reject,
}

/// What to do with a number that does not parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidInputPolicy {
    /// Ask again, giving up after `max_attempts` bad answers.
    Reprompt { max_attempts: u32 },
    /// Fail on the first bad answer.
    Abort,
}

impl Default for InvalidInputPolicy {
    fn default() -> Self {
        InvalidInputPolicy::Reprompt { max_attempts: 3 }
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Attribute the comparison is made on.
    pub attribute: Attribute,

    /// Text field capacities.
    pub limits: TextLimits,

    /// Handling of over-long text.
    pub overflow: OverflowPolicy,

    /// Handling of malformed numbers.
    pub invalid_input: InvalidInputPolicy,

    /// Log level for the stderr logger.
    pub log_level: LevelFilter,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            attribute: DEFAULT_ATTRIBUTE,
            limits: TextLimits::default(),
            overflow: OverflowPolicy::default(),
            invalid_input: InvalidInputPolicy::default(),
            log_level: LevelFilter::Warn,
        }
    }
}

impl MatchConfig {
    /// Create a configuration comparing on `attribute`, defaults elsewhere.
    #[must_use]
    pub fn new(attribute: Attribute) -> Self {
        Self {
            attribute,
            ..Self::default()
        }
    }

    /// Set the text field capacities.
    #[must_use]
    pub fn with_limits(mut self, limits: TextLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the handling of over-long text.
    #[must_use]
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Set the handling of malformed numbers.
    #[must_use]
    pub fn with_invalid_input(mut self, policy: InvalidInputPolicy) -> Self {
        self.invalid_input = policy;
        self
    }

    /// Set the stderr log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Number of times a numeric field is asked for before giving up.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        match self.invalid_input {
            InvalidInputPolicy::Reprompt { max_attempts } => max_attempts.max(1),
            InvalidInputPolicy::Abort => 1,
        }
    }
}
