//! # Session Manager
//!
//! Holds each client's to-do lists and pending flash messages, keyed by
//! an opaque session id. Storage is pluggable; the manager layers an
//! in-memory cache over it and exposes the list/todo mutations as
//! async operations.

pub mod error;
pub mod manager;
pub mod storage;
pub mod structs;

// Re-exports
pub use error::SessionError;
pub use manager::SessionManager;
pub use storage::{FileSessionStorage, MemorySessionStorage, SessionStorage};
pub use structs::{FlashLevel, FlashMessage, TodoSession};
