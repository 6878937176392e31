//! Moving cards from a hand onto the table as melds.

use std::collections::HashSet;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::domain::meld_id::{generate_meld_id, MeldId};
use crate::domain::melds::validate_meld;
use crate::domain::placement::{Location, Placement};
use crate::domain::state::PlayerId;
use crate::domain::Card;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MeldAction {
    Created,
    Extended,
}

/// Where a successful meld landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeldOutcome {
    pub action: MeldAction,
    pub owner: PlayerId,
    pub meld_id: MeldId,
}

/// Non-empty and free of repeated cards.
pub fn validate_selection(cards: &[Card]) -> Result<(), DomainError> {
    if cards.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidSelection,
            "No cards selected",
        ));
    }
    let mut seen = HashSet::with_capacity(cards.len());
    if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(DomainError::validation(
            ValidationKind::InvalidSelection,
            format!("Card {dup} selected more than once"),
        ));
    }
    Ok(())
}

fn ensure_in_hand(
    placement: &Placement,
    cards: &[Card],
    player: &PlayerId,
) -> Result<(), DomainError> {
    match cards.iter().find(|c| !placement.holds(player, **c)) {
        Some(card) => Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("Card {card} is not in {player}'s hand"),
        )),
        None => Ok(()),
    }
}

/// Lay `cards` down as a fresh meld owned by `player`.
pub fn make_new_meld<R>(
    placement: &mut Placement,
    cards: &[Card],
    player: &PlayerId,
    rng: &mut R,
) -> Result<MeldOutcome, DomainError>
where
    R: Rng + ?Sized,
{
    validate_selection(cards)?;
    ensure_in_hand(placement, cards, player)?;
    validate_meld(cards)?;

    let meld_id = generate_meld_id(rng, |id| placement.has_meld_id(id));
    let location = Location::Meld {
        owner: player.clone(),
        meld_id: meld_id.clone(),
    };
    for &card in cards {
        placement.set_location(card, location.clone());
    }
    Ok(MeldOutcome {
        action: MeldAction::Created,
        owner: player.clone(),
        meld_id,
    })
}

/// Extend an existing meld with `cards` from `player`'s hand.
///
/// The meld keeps its original owner.
pub fn add_to_meld(
    placement: &mut Placement,
    cards: &[Card],
    player: &PlayerId,
    meld_id: &MeldId,
) -> Result<MeldOutcome, DomainError> {
    validate_selection(cards)?;
    ensure_in_hand(placement, cards, player)?;

    let meld = placement.find_meld(meld_id).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Meld, format!("No meld with id {meld_id}"))
    })?;

    let mut combined = meld.cards.clone();
    combined.extend_from_slice(cards);
    validate_meld(&combined)?;

    let location = Location::Meld {
        owner: meld.owner.clone(),
        meld_id: meld.meld_id.clone(),
    };
    for &card in cards {
        placement.set_location(card, location.clone());
    }
    Ok(MeldOutcome {
        action: MeldAction::Extended,
        owner: meld.owner,
        meld_id: meld.meld_id,
    })
}

/// Try a new meld first, then each meld on the table in order.
///
/// Extending requires `player` to already own at least one meld.
pub fn meld_if_meldable<R>(
    placement: &mut Placement,
    cards: &[Card],
    player: &PlayerId,
    rng: &mut R,
) -> Result<MeldOutcome, DomainError>
where
    R: Rng + ?Sized,
{
    validate_selection(cards)?;
    ensure_in_hand(placement, cards, player)?;

    match make_new_meld(placement, cards, player, rng) {
        Ok(outcome) => return Ok(outcome),
        Err(err) => debug!(
            player = %player,
            error = %err,
            "Not a new meld, trying existing melds"
        ),
    }

    if placement.melds_of(player).is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidMeld,
            "Cannot add to melds before laying down one of your own",
        ));
    }

    for meld in placement.melds() {
        if let Ok(outcome) = add_to_meld(placement, cards, player, &meld.meld_id) {
            return Ok(outcome);
        }
    }

    Err(DomainError::validation(
        ValidationKind::InvalidMeld,
        "Selected cards fit neither a new meld nor any meld on the table",
    ))
}

/// Preview for the client: whether `cards` form a meld on their own or
/// together with any meld on the table. Ownership is not checked.
pub fn can_meld(placement: &Placement, cards: &[Card]) -> bool {
    if validate_selection(cards).is_err() {
        return false;
    }
    if validate_meld(cards).is_ok() {
        return true;
    }
    placement.melds().iter().any(|meld| {
        let mut combined = meld.cards.clone();
        combined.extend_from_slice(cards);
        validate_meld(&combined).is_ok()
    })
}
