//! Game flow orchestration service - bridges pure domain logic with session storage.
//!
//! Every command is one load → apply → save → notify cycle, serialized per room.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument};

use crate::config::game::GameFlowConfig;
use crate::domain::{
    apply_command, player_view, Command, CommandOutcome, CommandRequest, GameSession, PlayerId,
    PlayerView,
};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::SessionStore;
use crate::services::notifier::StateNotifier;

/// Game flow service - generic over the session store and the notifier.
pub struct GameFlowService<S, N> {
    store: S,
    notifier: N,
    config: GameFlowConfig,
    rng: Mutex<ChaCha8Rng>,
    room_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl<S, N> GameFlowService<S, N>
where
    S: SessionStore,
    N: StateNotifier,
{
    pub fn new(store: S, notifier: N, config: GameFlowConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            store,
            notifier,
            config,
            rng: Mutex::new(rng),
            room_locks: DashMap::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn config(&self) -> &GameFlowConfig {
        &self.config
    }

    fn room_lock(&self, room: &str) -> Arc<Mutex<()>> {
        self.room_locks
            .entry(room.to_string())
            .or_default()
            .value()
            .clone()
    }

    /// Transport entry point: raw command name and comma-joined card tokens.
    pub fn handle_raw(
        &self,
        room: &str,
        roster: &[PlayerId],
        command: &str,
        actor: &str,
        selection: Option<&str>,
    ) -> Result<GameSession, AppError> {
        let request = CommandRequest::parse(command, PlayerId::new(actor), selection)?;
        Ok(self.handle_command(room, roster, &request)?.session)
    }

    /// Apply one command to `room` and persist the result.
    ///
    /// Nothing is saved or announced when the command fails.
    #[instrument(
        skip(self, roster, request),
        fields(command = %request.command, actor = %request.actor)
    )]
    pub fn handle_command(
        &self,
        room: &str,
        roster: &[PlayerId],
        request: &CommandRequest,
    ) -> Result<CommandOutcome, AppError> {
        if request.command == Command::StartGame {
            self.check_table_size(roster)?;
        }

        let lock = self.room_lock(room);
        let _guard = lock.lock();

        let current = self.store.load(room)?;
        let outcome = {
            let mut rng = self.rng.lock();
            apply_command(current.as_ref(), roster, request, &mut *rng)?
        };

        self.store.save(room, &outcome.session)?;
        info!(
            room,
            current_player = %outcome.session.current_player(),
            transitions = outcome.transitions.len(),
            "Command applied"
        );
        self.notifier.on_state_changed(room, &outcome.transitions);
        Ok(outcome)
    }

    fn check_table_size(&self, roster: &[PlayerId]) -> Result<(), AppError> {
        match self.config.table_size {
            Some(size) if roster.len() != size => Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!("This table seats exactly {size} players, {} present", roster.len()),
            )
            .into()),
            _ => Ok(()),
        }
    }

    pub fn session(&self, room: &str) -> Result<Option<GameSession>, AppError> {
        self.store.load(room)
    }

    /// What `player` may see of the game in `room`.
    pub fn view(&self, room: &str, player: &PlayerId) -> Result<PlayerView, AppError> {
        let session = self.store.load(room)?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("No game in room {room}"))
        })?;
        Ok(player_view(&session, player)?)
    }

    pub fn delete_room(&self, room: &str) -> Result<bool, AppError> {
        let lock = self.room_lock(room);
        let _guard = lock.lock();
        let removed = self.store.delete(room)?;
        // Held by the map and by us only: nobody else is queued on this room.
        self.room_locks.remove_if(room, |_, held| Arc::strong_count(held) == 2);
        debug!(room, removed, "Room deleted");
        Ok(removed)
    }
}
