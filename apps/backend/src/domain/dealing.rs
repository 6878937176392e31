//! Dealing: random draws from the stock and the opening deal.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::domain::placement::{Location, Placement};
use crate::domain::rules::{validate_roster, INITIAL_HAND_SIZE};
use crate::domain::state::PlayerId;
use crate::domain::{Card, CARD_COUNT};
use crate::errors::domain::{DomainError, ValidationKind};

/// Uniformly pick one stock card, or `None` if the stock is empty.
pub fn pick_from_stock<R>(placement: &Placement, rng: &mut R) -> Option<Card>
where
    R: Rng + ?Sized,
{
    placement.stock().choose(rng).copied()
}

/// Move a uniformly chosen stock card into `player`'s hand.
pub fn draw<R>(
    placement: &mut Placement,
    player: &PlayerId,
    rng: &mut R,
) -> Result<Card, DomainError>
where
    R: Rng + ?Sized,
{
    let card = pick_from_stock(placement, rng).ok_or_else(|| {
        DomainError::validation(ValidationKind::EmptyStock, "Cannot draw: stock is empty")
    })?;
    placement.set_location(card, Location::hand(player));
    Ok(card)
}

/// Opening deal on an all-stock placement.
///
/// One card becomes the dora, each player then receives `INITIAL_HAND_SIZE`
/// cards, and the first player draws one more.
pub fn initialize_deck<R>(
    placement: &mut Placement,
    players: &[PlayerId],
    rng: &mut R,
) -> Result<(), DomainError>
where
    R: Rng + ?Sized,
{
    validate_roster(players)?;
    if placement.count_at(&Location::Stock) != CARD_COUNT {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Deck has already been dealt",
        ));
    }

    let dora = pick_from_stock(placement, rng).ok_or_else(|| {
        DomainError::validation(ValidationKind::EmptyStock, "Cannot pick dora: stock is empty")
    })?;
    placement.set_location(dora, Location::Dora);

    for player in players {
        for _ in 0..INITIAL_HAND_SIZE {
            draw(placement, player, rng)?;
        }
    }
    draw(placement, &players[0], rng)?;

    debug!(
        players = players.len(),
        dora = %dora,
        stock_left = placement.count_at(&Location::Stock),
        "Dealt opening hands"
    );
    Ok(())
}
