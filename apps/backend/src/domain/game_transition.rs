// apps/backend/src/domain/game_transition.rs

use serde::Serialize;

use crate::domain::meld_id::MeldId;
use crate::domain::melding::MeldAction;
use crate::domain::state::{GameSession, Phase, PlayerId};
use crate::domain::Card;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub phase: Option<Phase>,
    pub turn: Option<PlayerId>,
}

impl GameLifecycleView {
    pub fn of(session: Option<&GameSession>) -> Self {
        match session {
            None => Self {
                phase: None,
                turn: None,
            },
            Some(s) => {
                let phase = s.phase();
                let turn = phase.is_in_progress().then(|| s.current_player().clone());
                Self {
                    phase: Some(phase),
                    turn,
                }
            }
        }
    }

    fn in_progress(&self) -> bool {
        self.phase.as_ref().is_some_and(Phase::is_in_progress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameTransition {
    /// Edge-triggered: a fresh round was dealt.
    GameStarted,

    /// Edge-triggered: the turn became a specific player.
    #[serde(rename_all = "camelCase")]
    TurnBecame { player_id: PlayerId },

    /// Explicit: cards went onto the table.
    #[serde(rename_all = "camelCase")]
    CardsMelded {
        player_id: PlayerId,
        meld_id: MeldId,
        action: MeldAction,
        cards: Vec<Card>,
    },

    /// Explicit: a card was discarded.
    #[serde(rename_all = "camelCase")]
    CardDiscarded { player_id: PlayerId, card: Card },

    /// Edge-triggered: the round stopped being playable.
    RoundEnded { winner: Option<PlayerId> },
}

/// Derive domain transitions from before/after lifecycle state.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Round start (!InProgress -> InProgress)
    let started = !before.in_progress() && after.in_progress();
    if started {
        transitions.push(GameTransition::GameStarted);
    }

    // 2. Turn change; a restart always announces the first player
    if let Some(player_id) = &after.turn {
        if started || before.turn.as_ref() != Some(player_id) {
            transitions.push(GameTransition::TurnBecame {
                player_id: player_id.clone(),
            });
        }
    }

    // 3. Round end (InProgress -> Finished/Exhausted)
    if before.in_progress() && !after.in_progress() {
        let winner = match &after.phase {
            Some(Phase::Finished { winner }) => Some(winner.clone()),
            _ => None,
        };
        transitions.push(GameTransition::RoundEnded { winner });
    }

    transitions
}
