use std::fmt::{Display, Formatter, Result as FmtResult};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::dealing::initialize_deck;
use crate::domain::placement::{Location, Placement};
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};

/// Opaque player identifier owned by the room layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Round progression, derived from the table rather than stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Phase {
    /// Players take turns melding and discarding.
    InProgress,
    /// The turn reached a player with an empty hand; that player won.
    Finished { winner: PlayerId },
    /// The stock ran out before anyone went out.
    Exhausted,
}

impl Phase {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Phase::InProgress)
    }
}

/// The persisted unit: placement map, seating order and turn pointer.
///
/// Every value satisfies the table invariants (checked on start and on
/// deserialization), so accessors never fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord", into = "SessionRecord")]
pub struct GameSession {
    pub(crate) deck: Placement,
    players: Vec<PlayerId>,
    pub(crate) current_player_index: usize,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionRecord {
    deck: Placement,
    players: Vec<PlayerId>,
    current_player_index: usize,
}

impl TryFrom<SessionRecord> for GameSession {
    type Error = DomainError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        GameSession::from_parts(record.deck, record.players, record.current_player_index)
    }
}

impl From<GameSession> for SessionRecord {
    fn from(session: GameSession) -> Self {
        SessionRecord {
            deck: session.deck,
            players: session.players,
            current_player_index: session.current_player_index,
        }
    }
}

impl GameSession {
    /// Deal a fresh table for `players`; the first player is to act.
    pub fn start<R>(players: &[PlayerId], rng: &mut R) -> Result<Self, DomainError>
    where
        R: Rng + ?Sized,
    {
        let mut deck = Placement::new();
        initialize_deck(&mut deck, players, rng)?;
        Ok(Self {
            deck,
            players: players.to_vec(),
            current_player_index: 0,
        })
    }

    /// Assemble a session from stored parts, checking the table invariants.
    pub fn from_parts(
        deck: Placement,
        players: Vec<PlayerId>,
        current_player_index: usize,
    ) -> Result<Self, DomainError> {
        if current_player_index >= players.len() {
            return Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!(
                    "currentPlayerIndex {current_player_index} out of range for {} players",
                    players.len()
                ),
            ));
        }
        deck.check_table_invariants(&players)?;
        Ok(Self {
            deck,
            players,
            current_player_index,
        })
    }

    pub fn deck(&self) -> &Placement {
        &self.deck
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn current_player(&self) -> &PlayerId {
        &self.players[self.current_player_index]
    }

    pub fn seat_of(&self, player: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p == player)
    }

    pub fn next_player_index(&self) -> usize {
        (self.current_player_index + 1) % self.players.len()
    }

    pub fn phase(&self) -> Phase {
        let current = self.current_player();
        if self.deck.hand_len(current) == 0 {
            return Phase::Finished {
                winner: current.clone(),
            };
        }
        if self.deck.count_at(&Location::Stock) == 0 {
            return Phase::Exhausted;
        }
        Phase::InProgress
    }

    /// Guard for turn commands: round running, actor seated, actor to act.
    pub fn require_turn(&self, actor: &PlayerId) -> Result<(), DomainError> {
        let phase = self.phase();
        if !phase.is_in_progress() {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("The round is over ({phase:?})"),
            ));
        }
        if self.seat_of(actor).is_none() {
            return Err(DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {actor} is not seated in this game"),
            ));
        }
        if self.current_player() != actor {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                format!("Not your turn: waiting for {}", self.current_player()),
            ));
        }
        Ok(())
    }
}
