//! Session data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use todo_core::TodoList;

/// Per-client session state - the whole to-do collection lives here
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoSession {
    /// The client's lists, in creation order
    #[serde(default)]
    pub lists: Vec<TodoList>,

    /// Flash messages waiting to be shown on the next rendered page
    #[serde(default)]
    pub flashes: Vec<FlashMessage>,

    /// Last time the session was updated
    pub last_updated: DateTime<Utc>,
}

impl Default for TodoSession {
    fn default() -> Self {
        Self {
            lists: Vec::new(),
            flashes: Vec::new(),
            last_updated: Utc::now(),
        }
    }
}

impl TodoSession {
    /// Create a new empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a flash message for the next render
    pub fn push_flash(&mut self, level: FlashLevel, message: impl Into<String>) {
        self.flashes.push(FlashMessage {
            level,
            message: message.into(),
        });
    }

    /// Drain the pending flash messages. Flashes are one-shot: the
    /// second call returns nothing until new ones are queued.
    pub fn take_flashes(&mut self) -> Vec<FlashMessage> {
        std::mem::take(&mut self.flashes)
    }
}

/// Severity of a flash message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

/// A one-time user-facing notice surfaced on the next rendered page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_is_empty() {
        let session = TodoSession::default();
        assert!(session.lists.is_empty());
        assert!(session.flashes.is_empty());
    }

    #[test]
    fn test_take_flashes_drains() {
        let mut session = TodoSession::new();
        session.push_flash(FlashLevel::Success, "List added");
        session.push_flash(FlashLevel::Error, "Bad title");

        let flashes = session.take_flashes();
        assert_eq!(flashes.len(), 2);
        assert_eq!(flashes[0].level, FlashLevel::Success);
        assert_eq!(flashes[0].message, "List added");

        assert!(session.take_flashes().is_empty());
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut session = TodoSession::new();
        session.lists.push(todo_core::TodoList::new("Groceries"));
        session.push_flash(FlashLevel::Success, "ok");

        let json = serde_json::to_string(&session).unwrap();
        let deserialized: TodoSession = serde_json::from_str(&json).unwrap();

        assert_eq!(session.lists, deserialized.lists);
        assert_eq!(session.flashes, deserialized.flashes);
    }
}
