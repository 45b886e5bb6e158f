//! Session storage trait and implementations

use crate::error::{Result, SessionError};
use crate::structs::TodoSession;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;

/// Session storage trait
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Load a session
    async fn load_session(&self, session_id: &str) -> Result<TodoSession>;

    /// Save a session
    async fn save_session(&self, session_id: &str, session: &TodoSession) -> Result<()>;

    /// Check if a session exists
    async fn session_exists(&self, session_id: &str) -> bool;

    /// Delete a session
    async fn delete_session(&self, session_id: &str) -> Result<()>;
}

/// File-based session storage, one JSON file per session id
#[derive(Clone)]
pub struct FileSessionStorage {
    base_path: PathBuf,
}

impl FileSessionStorage {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// The id becomes a file name, so it must not carry path components.
    /// Only the characters found in uuids and similar opaque tokens pass.
    fn session_path(&self, session_id: &str) -> Result<PathBuf> {
        let valid = !session_id.is_empty()
            && session_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(SessionError::InvalidSessionId(session_id.to_string()));
        }
        Ok(self.base_path.join(format!("{}.json", session_id)))
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn load_session(&self, session_id: &str) -> Result<TodoSession> {
        let path = self.session_path(session_id)?;

        if !path.exists() {
            return Err(SessionError::NotFound);
        }

        let contents = fs::read_to_string(&path).await?;
        let session: TodoSession = serde_json::from_str(&contents)?;

        Ok(session)
    }

    async fn save_session(&self, session_id: &str, session: &TodoSession) -> Result<()> {
        let path = self.session_path(session_id)?;
        fs::create_dir_all(&self.base_path).await?;

        let contents = serde_json::to_string_pretty(session)?;

        fs::write(&path, contents).await?;

        Ok(())
    }

    async fn session_exists(&self, session_id: &str) -> bool {
        self.session_path(session_id)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    async fn delete_session(&self, session_id: &str) -> Result<()> {
        let path = self.session_path(session_id)?;

        if path.exists() {
            fs::remove_file(&path).await?;
        }

        Ok(())
    }
}

/// In-memory session storage for unit tests and in-process embedding
#[derive(Clone, Default)]
pub struct MemorySessionStorage {
    sessions: Arc<RwLock<HashMap<String, TodoSession>>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStorage for MemorySessionStorage {
    async fn load_session(&self, session_id: &str) -> Result<TodoSession> {
        let sessions = self.sessions.read().await;
        sessions
            .get(session_id)
            .cloned()
            .ok_or(SessionError::NotFound)
    }

    async fn save_session(&self, session_id: &str, session: &TodoSession) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session_id.to_string(), session.clone());
        Ok(())
    }

    async fn session_exists(&self, session_id: &str) -> bool {
        self.sessions.read().await.contains_key(session_id)
    }

    async fn delete_session(&self, session_id: &str) -> Result<()> {
        self.sessions.write().await.remove(session_id);
        Ok(())
    }
}
