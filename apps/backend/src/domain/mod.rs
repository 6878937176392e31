//! Domain layer: pure game logic types and helpers.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod commands;
pub mod dealing;
pub mod discards;
pub mod fixtures;
pub mod meld_id;
pub mod melding;
pub mod melds;
pub mod placement;
pub mod player_view;

pub mod game_transition;
pub mod rules;
pub mod scoring;
pub mod state;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_consistency;
#[cfg(test)]
mod tests_props_melds;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_session;

// Re-exports for ergonomics
pub use cards_parsing::{join_cards, parse_selection, try_parse_cards};
pub use cards_types::{Card, JokerId, Rank, Suit, ALL_CARDS, CARD_COUNT};
pub use commands::{apply_command, Command, CommandOutcome, CommandRequest};
pub use dealing::{draw, initialize_deck};
pub use discards::{discard, finish_waiting_called};
pub use game_transition::GameTransition;
pub use meld_id::MeldId;
pub use melding::{add_to_meld, can_meld, make_new_meld, meld_if_meldable, MeldAction, MeldOutcome};
pub use melds::validate_meld;
pub use placement::{Location, Meld, Placement};
pub use player_view::{player_view, PlayerView};
pub use scoring::{calc_score, round_result, RoundResult};
pub use state::{GameSession, Phase, PlayerId};
