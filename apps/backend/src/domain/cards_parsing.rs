//! Card parsing from token representations (e.g., "S07", "H13", "JO1").

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use super::cards_types::{Card, JokerId, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err =
            || DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"));

        match s {
            "JO1" => return Ok(Card::Joker(JokerId::One)),
            "JO2" => return Ok(Card::Joker(JokerId::Two)),
            _ => {}
        }
        if s.len() != 3 || !s.is_ascii() {
            return Err(parse_err());
        }
        let suit = match &s[..1] {
            "S" => Suit::Spades,
            "H" => Suit::Hearts,
            "D" => Suit::Diamonds,
            "C" => Suit::Clubs,
            _ => return Err(parse_err()),
        };
        // Ranks are always two zero-padded digits
        let digits = &s[1..];
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(parse_err());
        }
        let rank = digits
            .parse::<u8>()
            .ok()
            .and_then(Rank::from_value)
            .ok_or_else(parse_err)?;
        Ok(Card::Suited { suit, rank })
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Card::Suited { suit, rank } => write!(f, "{}{:02}", suit.letter(), rank.value()),
            Card::Joker(JokerId::One) => f.write_str("JO1"),
            Card::Joker(JokerId::Two) => f.write_str("JO2"),
        }
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().trim().parse::<Card>())
        .collect()
}

/// Parse the comma-joined selection the client submits ("S06,S07,S08").
///
/// An empty (or all-whitespace) string is an empty selection.
pub fn parse_selection(raw: &str) -> Result<Vec<Card>, DomainError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    try_parse_cards(raw.split(','))
}

/// Comma-joined token list, used in error details and logs.
pub fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
