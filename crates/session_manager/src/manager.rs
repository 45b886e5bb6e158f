//! Session Manager - list and todo operations over cached sessions

use crate::error::{Result, SessionError};
use crate::storage::SessionStorage;
use crate::structs::{FlashLevel, FlashMessage, TodoSession};
use std::collections::HashMap;
use std::sync::Arc;
use todo_core::{find_list_by_id_mut, find_todo_by_id_mut, Todo, TodoList};
use tokio::sync::RwLock;

/// Manages the sessions of every connected client, keyed by session id.
///
/// Reads hit an in-memory cache; every successful mutation is written
/// through to storage so a restart only loses the cache.
pub struct SessionManager<S: SessionStorage> {
    storage: Arc<S>,
    /// In-memory cache of active sessions (session_id -> session)
    sessions: Arc<RwLock<HashMap<String, Arc<RwLock<TodoSession>>>>>,
}

impl<S: SessionStorage> SessionManager<S> {
    /// Create a new SessionManager
    pub fn new(storage: S) -> Self {
        Self {
            storage: Arc::new(storage),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get or create a session. A first visit yields an empty session
    /// which is persisted immediately.
    pub async fn get_session(&self, session_id: &str) -> Result<TodoSession> {
        // Check cache first
        {
            let sessions = self.sessions.read().await;
            if let Some(session_lock) = sessions.get(session_id) {
                return Ok(session_lock.read().await.clone());
            }
        }

        // Load from storage or create new
        let session = match self.storage.load_session(session_id).await {
            Ok(session) => session,
            Err(SessionError::NotFound) => {
                tracing::debug!("creating empty session for {}", session_id);
                let new_session = TodoSession::default();
                self.storage.save_session(session_id, &new_session).await?;
                new_session
            }
            Err(e) => return Err(e),
        };

        // Add to cache
        {
            let mut sessions = self.sessions.write().await;
            sessions.insert(
                session_id.to_string(),
                Arc::new(RwLock::new(session.clone())),
            );
        }

        Ok(session)
    }

    /// Update the cache and persist a session
    async fn update_session(&self, session_id: &str, mut session: TodoSession) -> Result<()> {
        session.last_updated = chrono::Utc::now();

        {
            let mut sessions = self.sessions.write().await;
            if let Some(session_lock) = sessions.get(session_id) {
                *session_lock.write().await = session.clone();
            } else {
                sessions.insert(session_id.to_string(), Arc::new(RwLock::new(session.clone())));
            }
        }

        self.storage.save_session(session_id, &session).await
    }

    /// Append a new list. The caller validates the title first.
    pub async fn create_list(&self, session_id: &str, title: &str) -> Result<TodoList> {
        let mut session = self.get_session(session_id).await?;
        let list = TodoList::new(title);
        session.lists.push(list.clone());
        self.update_session(session_id, session).await?;
        Ok(list)
    }

    /// Change a list's title
    pub async fn rename_list(&self, session_id: &str, list_id: &str, title: &str) -> Result<()> {
        let mut session = self.get_session(session_id).await?;
        let list =
            find_list_by_id_mut(list_id, &mut session.lists).ok_or(SessionError::ListNotFound)?;
        list.title = title.to_string();
        self.update_session(session_id, session).await
    }

    /// Remove a list, returning it so callers can name it in messages
    pub async fn delete_list(&self, session_id: &str, list_id: &str) -> Result<TodoList> {
        let mut session = self.get_session(session_id).await?;
        let pos = session
            .lists
            .iter()
            .position(|list| list.id == list_id)
            .ok_or(SessionError::ListNotFound)?;
        let removed = session.lists.remove(pos);
        self.update_session(session_id, session).await?;
        Ok(removed)
    }

    /// Mark every todo in a list as completed
    pub async fn complete_all(&self, session_id: &str, list_id: &str) -> Result<()> {
        let mut session = self.get_session(session_id).await?;
        let list =
            find_list_by_id_mut(list_id, &mut session.lists).ok_or(SessionError::ListNotFound)?;
        list.complete_all();
        self.update_session(session_id, session).await
    }

    /// Append a todo to a list. The caller validates the title first.
    pub async fn add_todo(&self, session_id: &str, list_id: &str, title: &str) -> Result<Todo> {
        let mut session = self.get_session(session_id).await?;
        let list =
            find_list_by_id_mut(list_id, &mut session.lists).ok_or(SessionError::ListNotFound)?;
        let todo = Todo::new(title);
        list.todos.push(todo.clone());
        self.update_session(session_id, session).await?;
        Ok(todo)
    }

    /// Set a todo's completion state to the given value
    pub async fn set_todo_completed(
        &self,
        session_id: &str,
        list_id: &str,
        todo_id: &str,
        completed: bool,
    ) -> Result<()> {
        let mut session = self.get_session(session_id).await?;
        let list =
            find_list_by_id_mut(list_id, &mut session.lists).ok_or(SessionError::ListNotFound)?;
        let todo =
            find_todo_by_id_mut(todo_id, &mut list.todos).ok_or(SessionError::TodoNotFound)?;
        todo.completed = completed;
        self.update_session(session_id, session).await
    }

    /// Remove a single todo from a list
    pub async fn delete_todo(&self, session_id: &str, list_id: &str, todo_id: &str) -> Result<()> {
        let mut session = self.get_session(session_id).await?;
        let list =
            find_list_by_id_mut(list_id, &mut session.lists).ok_or(SessionError::ListNotFound)?;
        let pos = list
            .todos
            .iter()
            .position(|todo| todo.id == todo_id)
            .ok_or(SessionError::TodoNotFound)?;
        list.todos.remove(pos);
        self.update_session(session_id, session).await
    }

    /// Queue a flash message for the session's next rendered page
    pub async fn push_flash(
        &self,
        session_id: &str,
        level: FlashLevel,
        message: impl Into<String>,
    ) -> Result<()> {
        let mut session = self.get_session(session_id).await?;
        session.push_flash(level, message);
        self.update_session(session_id, session).await
    }

    /// Drain the session's pending flash messages
    pub async fn take_flashes(&self, session_id: &str) -> Result<Vec<FlashMessage>> {
        let mut session = self.get_session(session_id).await?;
        let flashes = session.take_flashes();
        if !flashes.is_empty() {
            self.update_session(session_id, session).await?;
        }
        Ok(flashes)
    }

    /// Clear cache for a session (forces reload from storage on next access)
    pub async fn clear_cache(&self, session_id: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(session_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileSessionStorage, MemorySessionStorage};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_first_visit_creates_empty_session() {
        let manager = SessionManager::new(MemorySessionStorage::new());

        let session = manager.get_session("fresh").await.unwrap();
        assert!(session.lists.is_empty());
        assert!(session.flashes.is_empty());
    }

    #[tokio::test]
    async fn test_create_and_delete_list() {
        let manager = SessionManager::new(MemorySessionStorage::new());

        let list = manager.create_list("s1", "Groceries").await.unwrap();
        let other = manager.create_list("s1", "Chores").await.unwrap();

        let session = manager.get_session("s1").await.unwrap();
        assert_eq!(session.lists.len(), 2);

        let removed = manager.delete_list("s1", &list.id).await.unwrap();
        assert_eq!(removed.title, "Groceries");

        // Deleting removes exactly that list and no other
        let session = manager.get_session("s1").await.unwrap();
        assert_eq!(session.lists.len(), 1);
        assert_eq!(session.lists[0].id, other.id);
    }

    #[tokio::test]
    async fn test_delete_missing_list_is_not_found() {
        let manager = SessionManager::new(MemorySessionStorage::new());

        let result = manager.delete_list("s1", "no-such-id").await;
        assert!(matches!(result, Err(SessionError::ListNotFound)));
    }

    #[tokio::test]
    async fn test_rename_list() {
        let manager = SessionManager::new(MemorySessionStorage::new());

        let list = manager.create_list("s1", "Groceries").await.unwrap();
        manager.rename_list("s1", &list.id, "Food").await.unwrap();

        let session = manager.get_session("s1").await.unwrap();
        assert_eq!(session.lists[0].title, "Food");
    }

    #[tokio::test]
    async fn test_add_toggle_delete_todo() {
        let manager = SessionManager::new(MemorySessionStorage::new());

        let list = manager.create_list("s1", "Groceries").await.unwrap();
        let todo = manager.add_todo("s1", &list.id, "Milk").await.unwrap();
        let keep = manager.add_todo("s1", &list.id, "Eggs").await.unwrap();

        manager
            .set_todo_completed("s1", &list.id, &todo.id, true)
            .await
            .unwrap();
        let session = manager.get_session("s1").await.unwrap();
        assert!(session.lists[0].todos[0].completed);

        manager
            .set_todo_completed("s1", &list.id, &todo.id, false)
            .await
            .unwrap();
        let session = manager.get_session("s1").await.unwrap();
        assert!(!session.lists[0].todos[0].completed);

        manager.delete_todo("s1", &list.id, &todo.id).await.unwrap();
        let session = manager.get_session("s1").await.unwrap();
        assert_eq!(session.lists[0].todos.len(), 1);
        assert_eq!(session.lists[0].todos[0].id, keep.id);
    }

    #[tokio::test]
    async fn test_toggle_missing_todo_is_not_found() {
        let manager = SessionManager::new(MemorySessionStorage::new());

        let list = manager.create_list("s1", "Groceries").await.unwrap();
        let result = manager
            .set_todo_completed("s1", &list.id, "no-such-id", true)
            .await;
        assert!(matches!(result, Err(SessionError::TodoNotFound)));
    }

    #[tokio::test]
    async fn test_complete_all_completes_the_list() {
        let manager = SessionManager::new(MemorySessionStorage::new());

        let list = manager.create_list("s1", "Groceries").await.unwrap();
        manager.add_todo("s1", &list.id, "Milk").await.unwrap();
        manager.add_todo("s1", &list.id, "Eggs").await.unwrap();

        manager.complete_all("s1", &list.id).await.unwrap();

        let session = manager.get_session("s1").await.unwrap();
        assert!(session.lists[0].is_completed());
    }

    #[tokio::test]
    async fn test_flash_messages_are_one_shot() {
        let manager = SessionManager::new(MemorySessionStorage::new());

        manager
            .push_flash("s1", FlashLevel::Success, "Groceries has been added!")
            .await
            .unwrap();

        let flashes = manager.take_flashes("s1").await.unwrap();
        assert_eq!(flashes.len(), 1);
        assert_eq!(flashes[0].message, "Groceries has been added!");

        assert!(manager.take_flashes("s1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let manager = SessionManager::new(MemorySessionStorage::new());

        manager.create_list("alice", "Groceries").await.unwrap();

        let bob = manager.get_session("bob").await.unwrap();
        assert!(bob.lists.is_empty());
    }

    #[tokio::test]
    async fn test_clear_cache_forces_reload_from_storage() {
        let storage = MemorySessionStorage::new();
        let manager = SessionManager::new(storage.clone());

        manager.create_list("s1", "Groceries").await.unwrap();

        // Overwrite the session behind the manager's back
        let mut external = storage.load_session("s1").await.unwrap();
        external.lists[0].title = "Food".to_string();
        storage.save_session("s1", &external).await.unwrap();

        // The cached copy still wins
        let session = manager.get_session("s1").await.unwrap();
        assert_eq!(session.lists[0].title, "Groceries");

        manager.clear_cache("s1").await;

        let session = manager.get_session("s1").await.unwrap();
        assert_eq!(session.lists[0].title, "Food");
    }

    #[tokio::test]
    async fn test_persistence_across_manager_instances() {
        let dir = tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path());

        let list_id = {
            let manager = SessionManager::new(storage.clone());
            let list = manager.create_list("s1", "Groceries").await.unwrap();
            manager.add_todo("s1", &list.id, "Milk").await.unwrap();
            list.id
        };

        // A new manager over the same storage sees the same session
        let manager = SessionManager::new(storage);
        let session = manager.get_session("s1").await.unwrap();
        assert_eq!(session.lists.len(), 1);
        assert_eq!(session.lists[0].id, list_id);
        assert_eq!(session.lists[0].todos.len(), 1);
    }
}
