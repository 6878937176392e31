//! Storage ports for the game flow service.

pub mod sessions;

pub use sessions::{InMemorySessionStore, SessionStore};
