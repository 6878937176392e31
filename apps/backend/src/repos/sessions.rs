//! Session persistence keyed by room identifier.

use dashmap::DashMap;
use tracing::debug;

use crate::domain::GameSession;
use crate::error::AppError;

/// Load/save hooks owned by whatever persists rooms.
pub trait SessionStore: Send + Sync {
    fn load(&self, room: &str) -> Result<Option<GameSession>, AppError>;

    fn save(&self, room: &str, session: &GameSession) -> Result<(), AppError>;

    /// Returns whether a session was stored for `room`.
    fn delete(&self, room: &str) -> Result<bool, AppError>;
}

/// Keeps each room's session as the JSON blob a database column would hold.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    blobs: DashMap<String, String>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn room_count(&self) -> usize {
        self.blobs.len()
    }

    /// Raw stored JSON, for inspection in tests and tooling.
    pub fn raw(&self, room: &str) -> Option<String> {
        self.blobs.get(room).map(|blob| blob.value().clone())
    }

    /// Overwrite the raw JSON for `room`, bypassing validation.
    pub fn put_raw(&self, room: &str, json: impl Into<String>) {
        self.blobs.insert(room.to_string(), json.into());
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self, room: &str) -> Result<Option<GameSession>, AppError> {
        let Some(blob) = self.blobs.get(room) else {
            return Ok(None);
        };
        let session = serde_json::from_str(blob.value())?;
        Ok(Some(session))
    }

    fn save(&self, room: &str, session: &GameSession) -> Result<(), AppError> {
        let json = serde_json::to_string(session)?;
        debug!(room, bytes = json.len(), "Saving session");
        self.blobs.insert(room.to_string(), json);
        Ok(())
    }

    fn delete(&self, room: &str) -> Result<bool, AppError> {
        Ok(self.blobs.remove(room).is_some())
    }
}
