//! Terminal I/O: reading cards in and printing them out.
//!
//! Both halves work on any `BufRead` / `Write` pair, so the game can be
//! driven from stdin/stdout or from in-memory buffers.

pub mod collector;
pub mod presenter;

pub use collector::{fit_text, strip_line_ending, Collector};
pub use presenter::{present, CardSheet, VerdictLine};
