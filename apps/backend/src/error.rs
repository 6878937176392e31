use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

/// Service-boundary error: wraps domain failures and operational ones.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Session store error: {detail}")]
    Store { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Domain(e) => e.code(),
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Store { .. } => ErrorCode::StoreError,
        }
    }

    /// Message fit for showing to the player who issued the command.
    pub fn detail(&self) -> String {
        match self {
            AppError::Domain(e) => e.detail().to_string(),
            AppError::Config { detail } | AppError::Store { detail } => detail.clone(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn store(detail: impl Into<String>) -> Self {
        Self::Store {
            detail: detail.into(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::store(format!("session json error: {e}"))
    }
}
