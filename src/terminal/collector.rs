//! Interactive card entry.
//!
//! The collector prompts for each `Field` in order and reads one line per
//! answer. Text answers are taken whole (minus the line ending) and fitted
//! to their configured capacity. Numeric answers skip blank lines, parse
//! the first token of the line and ignore the rest of it.
//!
//! Lines are decoded lossily: bytes that are not UTF-8 (a Latin-1 console,
//! say) become U+FFFD instead of failing the read.

use std::io::{BufRead, Write};
use std::str::FromStr;

use log::{debug, warn};

use crate::cards::{Card, Field};
use crate::core::{Error, MatchConfig, OverflowPolicy, ParseError, Result, TextLimits};

/// Numbers a card field can hold.
trait Numeric: FromStr {
    /// Reject values that parse but make no sense as a stat.
    fn is_valid(&self) -> bool {
        true
    }
}

impl Numeric for i64 {}

impl Numeric for u32 {}

impl Numeric for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// Drop a trailing `\n` or `\r\n`.
#[must_use]
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Fit `text` into the capacity configured for `field`.
///
/// Capacities count characters, so truncation never splits a code point.
pub fn fit_text(
    field: Field,
    text: String,
    limits: &TextLimits,
    overflow: OverflowPolicy,
) -> Result<String> {
    let Some(capacity) = limits.capacity(field) else {
        return Ok(text);
    };
    let len = text.chars().count();
    if len <= capacity {
        return Ok(text);
    }

    match overflow {
        OverflowPolicy::Truncate => {
            warn!("{} truncated from {} to {} characters", field, len, capacity);
            Ok(text.chars().take(capacity).collect())
        }
        OverflowPolicy::Reject => Err(Error::TextTooLong {
            field,
            len,
            capacity,
        }),
    }
}

/// Parse the first whitespace-separated token of `line`.
fn parse_token<T: Numeric>(field: Field, line: &str) -> std::result::Result<T, ParseError> {
    let token = line.split_whitespace().next().unwrap_or_default();
    token
        .parse::<T>()
        .ok()
        .filter(T::is_valid)
        .ok_or_else(|| ParseError {
            field,
            raw: line.trim().to_string(),
        })
}

/// Reads cards from an input stream, prompting on an output stream.
pub struct Collector<'c, R, W> {
    config: &'c MatchConfig,
    input: R,
    output: W,
    bytes: Vec<u8>,
    line: String,
}

impl<'c, R: BufRead, W: Write> Collector<'c, R, W> {
    /// Create a collector.
    pub fn new(config: &'c MatchConfig, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
            bytes: Vec::new(),
            line: String::new(),
        }
    }

    /// Prompt for and read one complete card.
    pub fn collect_card(&mut self) -> Result<Card> {
        writeln!(self.output, "\n=== Card Registration ===")?;

        let state = self.read_text(Field::State)?;
        let code = self.read_text(Field::Code)?;
        let city = self.read_text(Field::City)?;
        let population: i64 = self.read_number(Field::Population)?;
        let area: f64 = self.read_number(Field::Area)?;
        let gdp: f64 = self.read_number(Field::Gdp)?;
        let tourist_spots: u32 = self.read_number(Field::TouristSpots)?;

        let card = Card::builder(code, state, city)
            .population(population)
            .area(area)
            .gdp(gdp)
            .tourist_spots(tourist_spots)
            .build();
        debug!("collected card {} with density {:.2}", card.code(), card.density());
        Ok(card)
    }

    fn prompt(&mut self, field: Field) -> Result<()> {
        write!(self.output, "{}", field.prompt())?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line, without its line ending.
    fn read_line(&mut self, field: Field) -> Result<&str> {
        self.bytes.clear();
        if self.input.read_until(b'\n', &mut self.bytes)? == 0 {
            return Err(Error::UnexpectedEof { field });
        }
        self.line = String::from_utf8_lossy(&self.bytes).into_owned();
        Ok(strip_line_ending(&self.line))
    }

    fn read_text(&mut self, field: Field) -> Result<String> {
        self.prompt(field)?;
        let text = self.read_line(field)?.to_string();
        debug!("read {}: {:?}", field, text);
        fit_text(field, text, &self.config.limits, self.config.overflow)
    }

    fn read_number<T: Numeric>(&mut self, field: Field) -> Result<T> {
        let attempts = self.config.max_attempts();
        let mut attempt = 1;
        loop {
            self.prompt(field)?;
            let parsed = loop {
                let line = self.read_line(field)?;
                if !line.trim().is_empty() {
                    debug!("read {}: {:?}", field, line);
                    break parse_token::<T>(field, line);
                }
            };

            match parsed {
                Ok(value) => return Ok(value),
                Err(e) if attempt < attempts => {
                    warn!("{} (attempt {} of {})", e, attempt, attempts);
                    writeln!(self.output, "Invalid {}: {:?}. Please try again.", field, e.raw)?;
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
