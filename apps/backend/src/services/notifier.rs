use tracing::info;

use crate::domain::GameTransition;

/// Transport hook fired after a command's result has been persisted.
pub trait StateNotifier: Send + Sync {
    fn on_state_changed(&self, room: &str, transitions: &[GameTransition]);
}

/// Logs each change; stands in where no transport is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl StateNotifier for TracingNotifier {
    fn on_state_changed(&self, room: &str, transitions: &[GameTransition]) {
        for transition in transitions {
            info!(room, transition = ?transition, "State changed");
        }
        if transitions.is_empty() {
            info!(room, "State changed");
        }
    }
}
