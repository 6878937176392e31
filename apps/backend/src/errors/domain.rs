//! Domain-level error type used by the game engine and the session service.
//!
//! This error type is transport- and storage-agnostic. Every domain operation
//! fails closed: when it returns an error, the state it was handed is unchanged.

use thiserror::Error;

use crate::errors::ErrorCode;

/// Validation kinds for rule violations and malformed input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// A selected card is not in the acting player's hand.
    CardNotInHand,
    /// Cards (alone or combined with an existing meld) are not a legal meld.
    InvalidMeld,
    /// Unknown or reserved command name.
    InvalidCommand,
    /// Malformed selection (empty, duplicated cards, wrong count).
    InvalidSelection,
    /// Command issued against a session in the wrong state.
    PhaseMismatch,
    /// Acting player is not the current player.
    OutOfTurn,
    /// Draw requested from an empty stock.
    EmptyStock,
    /// Roster size or identifiers unsuitable for a new game.
    InvalidPlayerCount,
    ParseCard,
    ParseLocation,
    ParseMeldId,
    Other(String),
}

/// Domain-level not found entities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Meld,
    Player,
    Game,
    Other(String),
}

/// Infra error kinds to distinguish operational failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    DataCorruption,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input/user validation or game rule violation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Missing entity in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// Invariant breakage in stored or decoded data
    #[error("infra {0:?}: {1}")]
    Infra(InfraErrorKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// Human-readable detail without the kind prefix, suitable for the player.
    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d)
            | DomainError::NotFound(_, d)
            | DomainError::Infra(_, d) => d,
        }
    }

    /// Stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::CardNotInHand => ErrorCode::CardNotInHand,
                ValidationKind::InvalidMeld => ErrorCode::InvalidMeld,
                ValidationKind::InvalidCommand => ErrorCode::InvalidCommand,
                ValidationKind::InvalidSelection => ErrorCode::InvalidSelection,
                ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                ValidationKind::OutOfTurn => ErrorCode::OutOfTurn,
                ValidationKind::EmptyStock => ErrorCode::EmptyStock,
                ValidationKind::InvalidPlayerCount => ErrorCode::InvalidPlayerCount,
                ValidationKind::ParseCard => ErrorCode::ParseCard,
                ValidationKind::ParseLocation => ErrorCode::ParseLocation,
                ValidationKind::ParseMeldId => ErrorCode::ParseMeldId,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Meld => ErrorCode::MeldNotFound,
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
                NotFoundKind::Game => ErrorCode::GameNotFound,
                NotFoundKind::Other(_) => ErrorCode::NotFound,
            },
            DomainError::Infra(kind, _) => match kind {
                InfraErrorKind::DataCorruption => ErrorCode::DataCorruption,
                InfraErrorKind::Other(_) => ErrorCode::Internal,
            },
        }
    }
}
