#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod repos;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use config::game::{GameFlowConfig, LogFormat};
pub use domain::{
    apply_command, Card, Command, CommandOutcome, CommandRequest, GameSession, GameTransition,
    Phase, PlayerId, PlayerView,
};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use repos::{InMemorySessionStore, SessionStore};
pub use services::{GameFlowService, StateNotifier, TracingNotifier};
pub use telemetry::init_tracing;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
