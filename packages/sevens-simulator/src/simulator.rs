//! In-memory self-play through the public command API.
//!
//! Each game gets its own seeded service and room, so a game record's seed
//! replays it exactly.

use serde::Serialize;
use sevens_backend::domain::round_result;
use sevens_backend::{
    AppError, Command, CommandRequest, GameFlowConfig, GameFlowService, InMemorySessionStore,
    Phase, PlayerId, TracingNotifier,
};
use tracing::debug;

use crate::bot::{choose_discard, choose_meld};

const ROOM: &str = "simulation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndReason {
    Finished,
    Exhausted,
    TurnCap,
}

/// One JSONL line per game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game: u32,
    pub seed: u64,
    pub players: usize,
    pub turns: u32,
    pub melds: u32,
    pub end: EndReason,
    pub winner_seat: Option<usize>,
    /// Remaining-hand scores in seat order; empty when the turn cap hit.
    pub scores: Vec<u64>,
}

pub struct Simulator {
    players: Vec<PlayerId>,
    max_turns: u32,
}

impl Simulator {
    pub fn new(seats: usize, max_turns: u32) -> Self {
        let players = (0..seats).map(|i| PlayerId::new(format!("seat{i}"))).collect();
        Self { players, max_turns }
    }

    pub fn simulate_game(&self, game: u32, seed: u64) -> Result<GameRecord, AppError> {
        let config = GameFlowConfig::default()
            .with_seed(seed)
            .with_table_size(Some(self.players.len()));
        let service = GameFlowService::new(InMemorySessionStore::new(), TracingNotifier, config);

        let opener = CommandRequest::new(Command::StartGame, self.players[0].clone(), Vec::new());
        let mut session = service.handle_command(ROOM, &self.players, &opener)?.session;

        let mut turns = 0;
        let mut melds = 0;
        while session.phase() == Phase::InProgress && turns < self.max_turns {
            let me = session.current_player().clone();

            while let Some(cards) = choose_meld(session.deck(), &me) {
                debug!(game, seat = %me, cards = cards.len(), "Bot melds");
                let request = CommandRequest::new(Command::Meld, me.clone(), cards);
                session = service.handle_command(ROOM, &self.players, &request)?.session;
                melds += 1;
            }
            if !session.phase().is_in_progress() {
                break;
            }

            let hand = session.deck().hand_of(&me);
            let dora = session.deck().dora();
            let Some(card) = dora.and_then(|d| choose_discard(&hand, d)) else {
                break;
            };
            let request = CommandRequest::new(Command::Discard, me, vec![card]);
            session = service.handle_command(ROOM, &self.players, &request)?.session;
            turns += 1;
        }

        let (end, winner_seat) = match session.phase() {
            Phase::InProgress => (EndReason::TurnCap, None),
            Phase::Exhausted => (EndReason::Exhausted, None),
            Phase::Finished { winner } => (EndReason::Finished, session.seat_of(&winner)),
        };
        let scores = round_result(&session)
            .map(|r| r.scores.into_iter().map(|s| s.score).collect())
            .unwrap_or_default();

        Ok(GameRecord {
            game,
            seed,
            players: self.players.len(),
            turns,
            melds,
            end,
            winner_seat,
            scores,
        })
    }
}
