//! Turn commands and the single entry point that applies them to a session.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use rand::Rng;
use tracing::{debug, warn};

use crate::domain::cards_parsing::parse_selection;
use crate::domain::dealing::draw;
use crate::domain::discards::{discard, finish_waiting_called};
use crate::domain::game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
use crate::domain::melding::{meld_if_meldable, MeldOutcome};
use crate::domain::placement::Location;
use crate::domain::state::{GameSession, PlayerId};
use crate::domain::Card;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    StartGame,
    Meld,
    Discard,
    /// Reserved; always rejected.
    Pong,
    /// Reserved; always rejected.
    Chow,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        match self {
            Command::StartGame => "start-game",
            Command::Meld => "meld",
            Command::Discard => "discard",
            Command::Pong => "pong",
            Command::Chow => "chow",
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start-game" | "new-game" => Ok(Command::StartGame),
            "meld" => Ok(Command::Meld),
            "discard" => Ok(Command::Discard),
            "pong" => Ok(Command::Pong),
            "chow" => Ok(Command::Chow),
            other => Err(DomainError::validation(
                ValidationKind::InvalidCommand,
                format!("Unknown command: {other}"),
            )),
        }
    }
}

/// One player's request as it arrives from transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub command: Command,
    pub actor: PlayerId,
    pub selection: Vec<Card>,
}

impl CommandRequest {
    pub fn new(command: Command, actor: PlayerId, selection: Vec<Card>) -> Self {
        Self {
            command,
            actor,
            selection,
        }
    }

    /// Parse the transport form: command name plus optional comma-joined tokens.
    pub fn parse(
        command: &str,
        actor: PlayerId,
        selection: Option<&str>,
    ) -> Result<Self, DomainError> {
        let command = command.parse()?;
        let selection = match selection {
            Some(raw) => parse_selection(raw)?,
            None => Vec::new(),
        };
        Ok(Self::new(command, actor, selection))
    }
}

/// What a discard did, for logs and notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardOutcome {
    pub card: Card,
    pub next_player: PlayerId,
    pub next_player_drew: bool,
}

impl GameSession {
    /// Meld for the current player. Fails without changes.
    pub fn meld<R>(
        &mut self,
        actor: &PlayerId,
        cards: &[Card],
        rng: &mut R,
    ) -> Result<MeldOutcome, DomainError>
    where
        R: Rng + ?Sized,
    {
        self.require_turn(actor)?;
        meld_if_meldable(&mut self.deck, cards, actor, rng)
    }

    /// Discard one card, pass the turn and let the next player draw.
    ///
    /// The next player does not draw when their hand is empty (they won) or
    /// the stock is empty (the round is exhausted).
    pub fn discard<R>(
        &mut self,
        actor: &PlayerId,
        cards: &[Card],
        rng: &mut R,
    ) -> Result<DiscardOutcome, DomainError>
    where
        R: Rng + ?Sized,
    {
        self.require_turn(actor)?;
        let card = match cards {
            [card] => *card,
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::InvalidSelection,
                    format!("Discard needs exactly one card, got {}", cards.len()),
                ))
            }
        };

        discard(&mut self.deck, card, actor)?;
        finish_waiting_called(&mut self.deck);
        self.current_player_index = self.next_player_index();

        let next_player = self.current_player().clone();
        let next_player_drew = self.deck.hand_len(&next_player) > 0
            && self.deck.count_at(&Location::Stock) > 0;
        if next_player_drew {
            draw(&mut self.deck, &next_player, rng)?;
        }

        Ok(DiscardOutcome {
            card,
            next_player,
            next_player_drew,
        })
    }
}

/// A successfully applied command: the session to persist and what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub session: GameSession,
    pub transitions: Vec<GameTransition>,
}

/// Apply `request` to the room's current session.
///
/// `roster` is the room's seated players, used when a new round is dealt.
/// The input session is never modified; on error nothing needs persisting.
pub fn apply_command<R>(
    current: Option<&GameSession>,
    roster: &[PlayerId],
    request: &CommandRequest,
    rng: &mut R,
) -> Result<CommandOutcome, DomainError>
where
    R: Rng + ?Sized,
{
    let before = GameLifecycleView::of(current);
    let actor = &request.actor;
    debug!(
        command = %request.command,
        actor = %actor,
        cards = request.selection.len(),
        "Applying command"
    );

    let mut events = Vec::new();
    let session = match request.command {
        Command::StartGame => {
            if current.is_some_and(|s| s.phase().is_in_progress()) {
                return Err(reject(DomainError::validation(
                    ValidationKind::PhaseMismatch,
                    "A round is already in progress",
                )));
            }
            if !roster.contains(actor) {
                return Err(reject(DomainError::not_found(
                    NotFoundKind::Player,
                    format!("Player {actor} is not in this room"),
                )));
            }
            GameSession::start(roster, rng).map_err(reject)?
        }
        Command::Meld => {
            let mut session = require_session(current)?.clone();
            let outcome = session
                .meld(actor, &request.selection, rng)
                .map_err(reject)?;
            events.push(GameTransition::CardsMelded {
                player_id: actor.clone(),
                meld_id: outcome.meld_id,
                action: outcome.action,
                cards: request.selection.clone(),
            });
            session
        }
        Command::Discard => {
            let mut session = require_session(current)?.clone();
            let outcome = session
                .discard(actor, &request.selection, rng)
                .map_err(reject)?;
            events.push(GameTransition::CardDiscarded {
                player_id: actor.clone(),
                card: outcome.card,
            });
            session
        }
        Command::Pong | Command::Chow => {
            return Err(reject(DomainError::validation(
                ValidationKind::InvalidCommand,
                format!("Command {} is not supported", request.command),
            )));
        }
    };

    let after = GameLifecycleView::of(Some(&session));
    events.extend(derive_game_transitions(&before, &after));
    Ok(CommandOutcome {
        session,
        transitions: events,
    })
}

fn require_session(current: Option<&GameSession>) -> Result<&GameSession, DomainError> {
    current.ok_or_else(|| {
        reject(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "No game has been started in this room",
        ))
    })
}

fn reject(err: DomainError) -> DomainError {
    warn!(error = %err, "Command rejected");
    err
}
