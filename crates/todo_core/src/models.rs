//! To-do list data structures

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single actionable item with a completion flag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    /// Opaque unique id
    pub id: String,

    /// Display title, non-empty and at most 100 characters
    pub title: String,

    /// Whether the item is done
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Create an incomplete todo with a freshly generated id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            completed: false,
        }
    }
}

/// A named, ordered collection of [`Todo`] items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoList {
    /// Opaque unique id
    pub id: String,

    /// Display title, case-insensitively unique within a session
    pub title: String,

    /// Items in insertion order
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl TodoList {
    /// Create an empty list with a freshly generated id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// Number of todos not yet completed
    pub fn todos_remaining(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    /// A list counts as completed only once it has at least one todo
    /// and none of them remain open. An empty list is never completed.
    pub fn is_completed(&self) -> bool {
        !self.todos.is_empty() && self.todos_remaining() == 0
    }

    /// Mark every todo in the list as completed
    pub fn complete_all(&mut self) {
        for todo in &mut self.todos {
            todo.completed = true;
        }
    }
}
