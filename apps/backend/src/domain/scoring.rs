//! Hand scoring with ace, joker and dora multipliers.

use serde::Serialize;

use crate::domain::state::{GameSession, Phase, PlayerId};
use crate::domain::{Card, Rank};

const JOKER_POINTS: u64 = 100;
const SEVEN_POINTS: u64 = 50;

fn card_points(card: Card) -> u64 {
    match card.rank() {
        None => JOKER_POINTS,
        Some(Rank::Seven) => SEVEN_POINTS,
        Some(rank) => u64::from(rank.value()),
    }
}

fn times_pow(score: u64, base: u64, exp: usize) -> u64 {
    (0..exp).fold(score, |acc, _| acc.saturating_mul(base))
}

/// The rank a normal dora doubles: one above it, King wrapping to Ace.
pub fn dora_target(dora_rank: Rank) -> Rank {
    let next = dora_rank.value() % 13 + 1;
    Rank::from_value(next).unwrap_or(Rank::Ace)
}

/// Score `hand` against `dora`.
///
/// Steps compose multiplicatively in this order: base points, x2 per ace,
/// x5 per joker, then the dora bonus. A joker dora squares the total when
/// the hand's first card is a joker; a normal dora gives x2 per card of the
/// target rank. Saturates at `u64::MAX`.
pub fn calc_score(hand: &[Card], dora: Card) -> u64 {
    let base: u64 = hand.iter().map(|c| card_points(*c)).sum();

    let aces = hand.iter().filter(|c| c.is_rank(Rank::Ace)).count();
    let jokers = hand.iter().filter(|c| c.is_joker()).count();
    let mut score = times_pow(base, 2, aces);
    score = times_pow(score, 5, jokers);

    match dora.rank() {
        None => {
            if hand.first().is_some_and(|c| c.is_joker()) {
                score = score.saturating_mul(score);
            }
        }
        Some(rank) => {
            let target = dora_target(rank);
            let hits = hand.iter().filter(|c| c.is_rank(target)).count();
            score = times_pow(score, 2, hits);
        }
    }
    score
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScore {
    pub player: PlayerId,
    pub score: u64,
    pub hand: Vec<Card>,
}

/// Scores for a round that has ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    /// `None` when the stock ran out.
    pub winner: Option<PlayerId>,
    pub dora: Card,
    /// Seating order.
    pub scores: Vec<PlayerScore>,
}

/// `None` while the round is still being played.
pub fn round_result(session: &GameSession) -> Option<RoundResult> {
    let winner = match session.phase() {
        Phase::InProgress => return None,
        Phase::Finished { winner } => Some(winner),
        Phase::Exhausted => None,
    };
    let dora = session.deck().dora()?;
    let scores = session
        .players()
        .iter()
        .map(|player| {
            let hand = session.deck().hand_of(player);
            PlayerScore {
                player: player.clone(),
                score: calc_score(&hand, dora),
                hand,
            }
        })
        .collect();
    Some(RoundResult {
        winner,
        dora,
        scores,
    })
}
