//! Meld validation: runs, sets and the seven exception.

use crate::domain::cards_parsing::join_cards;
use crate::domain::{Card, Rank};
use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_MELD_LEN: usize = 3;

/// Accept `cards` as a meld, or explain why not.
///
/// A meld is one of:
/// - a run: at least 3 cards of one suit with consecutive ranks,
/// - a set: at least 3 cards of equal rank,
/// - a single seven,
/// - a same-suit run of at least 2 cards that contains a seven.
///
/// Jokers never belong to a meld. Ace is low only (1).
pub fn validate_meld(cards: &[Card]) -> Result<(), DomainError> {
    if cards.len() >= MIN_MELD_LEN && (is_same_suit_run(cards) || is_same_rank(cards)) {
        return Ok(());
    }

    if cards.iter().any(|c| c.is_rank(Rank::Seven))
        && (cards.len() == 1 || is_same_suit_run(cards))
    {
        return Ok(());
    }

    Err(DomainError::validation(
        ValidationKind::InvalidMeld,
        format!("Cards do not form a meld: {}", join_cards(cards)),
    ))
}

pub fn is_valid_meld(cards: &[Card]) -> bool {
    validate_meld(cards).is_ok()
}

/// Two or more suited cards of one suit whose sorted ranks step by exactly one.
fn is_same_suit_run(cards: &[Card]) -> bool {
    if cards.len() < 2 {
        return false;
    }
    let Some(suit) = cards[0].suit() else {
        return false;
    };

    let mut values = Vec::with_capacity(cards.len());
    for card in cards {
        match card {
            Card::Suited { suit: s, rank } if *s == suit => values.push(rank.value()),
            _ => return false,
        }
    }
    values.sort_unstable();
    values.windows(2).all(|w| w[1] == w[0] + 1)
}

fn is_same_rank(cards: &[Card]) -> bool {
    let Some(first) = cards.first().and_then(|c| c.rank()) else {
        return false;
    };
    cards.iter().all(|c| c.rank() == Some(first))
}
