//! One full match, from banner to verdict.

use std::io::{BufRead, Write};

use log::info;
use serde::Serialize;

use crate::cards::{Attribute, Card};
use crate::core::{MatchConfig, Result};
use crate::rules::{compare, Verdict};
use crate::terminal::{present, Collector, VerdictLine};

/// Everything a finished match produced.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchOutcome {
    pub attribute: Attribute,
    pub first: Card,
    pub second: Card,
    pub verdict: Verdict,
}

impl MatchOutcome {
    /// The winning card, if the match was not a tie.
    #[must_use]
    pub fn winner(&self) -> Option<&Card> {
        self.verdict.winner(&self.first, &self.second)
    }
}

/// Play one match: read two cards from `input`, print both and the verdict
/// to `output`.
pub fn run<R: BufRead, W: Write>(
    config: &MatchConfig,
    mut input: R,
    mut output: W,
) -> Result<MatchOutcome> {
    writeln!(output, "=== Super Trunfo: Cities ===")?;
    writeln!(output, "Chosen attribute: {}", config.attribute)?;

    let (first, second) = {
        let mut collector = Collector::new(config, &mut input, &mut output);
        let first = collector.collect_card()?;
        (first, collector.collect_card()?)
    };

    writeln!(output, "\n=== Registered Cards ===")?;
    present(&mut output, &first)?;
    present(&mut output, &second)?;

    let verdict = compare(&first, &second, config.attribute);
    info!(
        "{} vs {} on {:?}: {:?}",
        first.code(),
        second.code(),
        config.attribute,
        verdict
    );

    writeln!(output, "\n=== Comparison Result ({}) ===", config.attribute)?;
    writeln!(
        output,
        "{}",
        VerdictLine {
            verdict,
            first: &first,
            second: &second,
        }
    )?;
    output.flush()?;

    Ok(MatchOutcome {
        attribute: config.attribute,
        first,
        second,
        verdict,
    })
}
