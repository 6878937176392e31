use std::collections::HashSet;

use crate::domain::state::PlayerId;
use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_PLAYERS: usize = 2;
/// 1 dora + 7 * 7 dealt + 1 extra = 51 of 54 cards.
pub const MAX_PLAYERS: usize = 7;
pub const INITIAL_HAND_SIZE: usize = 7;

/// Roster check shared by dealing and session start.
pub fn validate_roster(players: &[PlayerId]) -> Result<(), DomainError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!(
                "A game needs {MIN_PLAYERS}..={MAX_PLAYERS} players, got {}",
                players.len()
            ),
        ));
    }
    if players.iter().any(|p| p.as_str().is_empty()) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            "Player ids must not be empty",
        ));
    }
    let mut seen = HashSet::with_capacity(players.len());
    for player in players {
        if !seen.insert(player) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!("Player {player} is seated twice"),
            ));
        }
    }
    Ok(())
}
