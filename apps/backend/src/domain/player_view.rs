//! Player view of game state - what information is visible to a player.
//!
//! [`PlayerView`] is what a client renders for one seat: its own hand in full,
//! everyone's melds, and only the sizes of opponents' hands.

use serde::Serialize;

use crate::domain::placement::{Location, Meld};
use crate::domain::scoring::{round_result, RoundResult};
use crate::domain::state::{GameSession, Phase, PlayerId};
use crate::domain::Card;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpponentView {
    pub player_id: PlayerId,
    pub hand_count: usize,
    pub melds: Vec<Meld>,
}

/// Information visible to a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub me: PlayerId,
    /// Catalog order.
    pub hand: Vec<Card>,
    pub my_melds: Vec<Meld>,
    /// Seating order starting after `me`.
    pub opponents: Vec<OpponentView>,
    pub discard_top: Option<Card>,
    pub stock_count: usize,
    pub dora: Option<Card>,
    pub current_player: PlayerId,
    pub is_my_turn: bool,
    pub phase: Phase,
    pub result: Option<RoundResult>,
}

impl PlayerView {
    pub fn can_act(&self) -> bool {
        self.is_my_turn && self.phase.is_in_progress()
    }
}

/// Project `session` for the seat of `me`.
pub fn player_view(session: &GameSession, me: &PlayerId) -> Result<PlayerView, DomainError> {
    let seat = session.seat_of(me).ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Player,
            format!("Player {me} is not seated in this game"),
        )
    })?;

    let deck = session.deck();
    let players = session.players();
    let opponents = (1..players.len())
        .map(|offset| &players[(seat + offset) % players.len()])
        .map(|p| OpponentView {
            player_id: p.clone(),
            hand_count: deck.hand_len(p),
            melds: deck.melds_of(p),
        })
        .collect();

    let current_player = session.current_player().clone();
    Ok(PlayerView {
        me: me.clone(),
        hand: deck.hand_of(me),
        my_melds: deck.melds_of(me),
        opponents,
        discard_top: deck.discard_top(),
        stock_count: deck.count_at(&Location::Stock),
        dora: deck.dora(),
        is_my_turn: &current_player == me,
        current_player,
        phase: session.phase(),
        result: round_result(session),
    })
}
