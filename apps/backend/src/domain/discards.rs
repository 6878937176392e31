//! Discard pile handling.

use crate::domain::placement::{Location, Placement};
use crate::domain::state::PlayerId;
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// Put `card` from `player`'s hand on the waiting-called slot.
///
/// The current discard top stays visible until the call window closes.
pub fn discard(
    placement: &mut Placement,
    card: Card,
    player: &PlayerId,
) -> Result<(), DomainError> {
    if !placement.holds(player, card) {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("Card {card} is not in {player}'s hand"),
        ));
    }
    placement.set_location(card, Location::WaitingCalled);
    Ok(())
}

/// Close the call window: the previous top is buried and the waiting card
/// becomes the discard top.
///
/// No-op when nothing is waiting.
pub fn finish_waiting_called(placement: &mut Placement) {
    let waiting = placement.cards_at(&Location::WaitingCalled);
    if waiting.is_empty() {
        return;
    }
    for top in placement.cards_at(&Location::DiscardTop) {
        placement.set_location(top, Location::Discard);
    }
    for card in waiting {
        placement.set_location(card, Location::DiscardTop);
    }
}
