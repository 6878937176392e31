//! Error codes surfaced to clients.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Card not in hand
    CardNotInHand,
    /// Cards do not form a legal meld
    InvalidMeld,
    /// Unknown or reserved command
    InvalidCommand,
    /// Malformed card selection
    InvalidSelection,
    /// Phase mismatch
    PhaseMismatch,
    /// Out of turn
    OutOfTurn,
    /// Stock is empty
    EmptyStock,
    /// Unsuitable roster for a new game
    InvalidPlayerCount,
    /// Parse card error
    ParseCard,
    /// Parse location error
    ParseLocation,
    /// Malformed meld id
    ParseMeldId,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Meld not found
    MeldNotFound,
    /// Player not seated in the game
    PlayerNotFound,
    /// No game in the room
    GameNotFound,
    /// General not found error
    NotFound,

    // System Errors
    /// Session store failure
    StoreError,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::InvalidMeld => "INVALID_MELD",
            Self::InvalidCommand => "INVALID_COMMAND",
            Self::InvalidSelection => "INVALID_SELECTION",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::EmptyStock => "EMPTY_STOCK",
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::ParseCard => "PARSE_CARD",
            Self::ParseLocation => "PARSE_LOCATION",
            Self::ParseMeldId => "PARSE_MELD_ID",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::MeldNotFound => "MELD_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::StoreError => "STORE_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
