//! Common error types.

use crate::cards::Field;

/// A shortcut type equivalent to `Result<T, city_trunfo::core::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// A numeric field whose input could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// Field being read.
    pub field: Field,
    /// The offending text, as typed.
    pub raw: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {:?}", self.field, self.raw)
    }
}

impl std::error::Error for ParseError {}

/// Represents an error that occurs within the crate.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    UnexpectedEof { field: Field },
    Parse(ParseError),
    TextTooLong { field: Field, len: usize, capacity: usize },
    Logging(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::UnexpectedEof { field } => {
                write!(f, "input ended while reading {field}")
            }
            Error::Parse(e) => write!(f, "{e}"),
            Error::TextTooLong {
                field,
                len,
                capacity,
            } => write!(
                f,
                "{field} is {len} characters long, at most {capacity} allowed"
            ),
            Error::Logging(e) => write!(f, "logger setup failed: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}
