//! Card and verdict rendering.

use std::fmt;
use std::io::{self, Write};

use crate::cards::Card;
use crate::rules::Verdict;

/// Fixed-layout view of a card.
///
/// ```
/// use city_trunfo::cards::Card;
/// use city_trunfo::terminal::CardSheet;
///
/// let card = Card::builder("A01", "RO", "Ji-Parana").population(10).area(4.0).build();
/// let text = CardSheet(&card).to_string();
/// assert!(text.starts_with("--- Card A01 (RO) ---\n"));
/// assert!(text.contains("Density:             2.50 inhabitants/km2"));
/// ```
pub struct CardSheet<'a>(pub &'a Card);

impl fmt::Display for CardSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = self.0;
        writeln!(f, "--- Card {} ({}) ---", card.code(), card.state())?;
        writeln!(f, "City:                {}", card.city())?;
        writeln!(f, "Population:          {} inhabitants", card.population())?;
        writeln!(f, "Area:                {:.2} km2", card.area())?;
        writeln!(f, "GDP:                 {:.2}", card.gdp())?;
        writeln!(f, "Tourist spots:       {}", card.tourist_spots())?;
        writeln!(f, "Density:             {:.2} inhabitants/km2", card.density())
    }
}

/// Closing line of a match: the winning card, or a tie.
pub struct VerdictLine<'a> {
    pub verdict: Verdict,
    pub first: &'a Card,
    pub second: &'a Card,
}

impl fmt::Display for VerdictLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.verdict.winner(self.first, self.second) {
            Some(card) => write!(
                f,
                "Winner: card {} ({}) - City: {}",
                card.code(),
                card.state(),
                card.city()
            ),
            None => f.write_str("Tie!"),
        }
    }
}

/// Write a card, preceded by a blank line.
pub fn present<W: Write>(out: &mut W, card: &Card) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", CardSheet(card))
}
