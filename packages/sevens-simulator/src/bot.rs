//! Greedy bot: meld everything it can, then shed its most expensive card.

use sevens_backend::domain::melding::can_meld;
use sevens_backend::domain::melds::is_valid_meld;
use sevens_backend::domain::{calc_score, Card, Placement, PlayerId, Rank, Suit};

/// Split sorted, distinct values into runs of consecutive numbers.
fn consecutive_chains(sorted: &[u8]) -> Vec<Vec<u8>> {
    let mut chains: Vec<Vec<u8>> = Vec::new();
    for &v in sorted {
        match chains.last_mut() {
            Some(chain) if chain.last().is_some_and(|&last| last + 1 == v) => chain.push(v),
            _ => chains.push(vec![v]),
        }
    }
    chains
}

/// Meld shapes found in `hand`, biggest first: runs, sets, then single cards
/// (sevens before the rest) that may stand alone or extend a table meld.
pub fn meld_candidates(hand: &[Card]) -> Vec<Vec<Card>> {
    let mut out = Vec::new();

    for suit in Suit::ALL {
        let mut values: Vec<u8> = hand
            .iter()
            .filter(|c| c.suit() == Some(suit))
            .filter_map(|c| c.rank())
            .map(Rank::value)
            .collect();
        values.sort_unstable();
        for chain in consecutive_chains(&values) {
            let cards: Vec<Card> = chain
                .iter()
                .filter_map(|v| Rank::from_value(*v))
                .map(|r| Card::suited(suit, r))
                .collect();
            if is_valid_meld(&cards) {
                out.push(cards);
            }
        }
    }

    for rank in Rank::ALL {
        let same: Vec<Card> = hand.iter().copied().filter(|c| c.is_rank(rank)).collect();
        if same.len() >= 3 {
            out.push(same);
        }
    }

    let (sevens, others): (Vec<Card>, Vec<Card>) =
        hand.iter().partition(|c| c.is_rank(Rank::Seven));
    out.extend(sevens.into_iter().map(|c| vec![c]));
    out.extend(others.into_iter().filter(|c| !c.is_joker()).map(|c| vec![c]));
    out
}

/// The first candidate the table would accept from `me`.
pub fn choose_meld(placement: &Placement, me: &PlayerId) -> Option<Vec<Card>> {
    let hand = placement.hand_of(me);
    let owns_meld = !placement.melds_of(me).is_empty();
    meld_candidates(&hand)
        .into_iter()
        .find(|cards| can_meld(placement, cards) && (owns_meld || is_valid_meld(cards)))
}

/// The card that would cost the most if the round ended now.
/// Ties go to the earliest card in catalog order.
pub fn choose_discard(hand: &[Card], dora: Card) -> Option<Card> {
    let mut best: Option<(u64, Card)> = None;
    for &card in hand {
        let cost = calc_score(&[card], dora);
        if best.map_or(true, |(top, _)| cost > top) {
            best = Some((cost, card));
        }
    }
    best.map(|(_, card)| card)
}
