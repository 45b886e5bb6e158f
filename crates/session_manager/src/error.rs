//! Session manager error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session not found")]
    NotFound,

    #[error("Invalid session id: {0}")]
    InvalidSessionId(String),

    #[error("List not found.")]
    ListNotFound,

    #[error("Todo not found.")]
    TodoNotFound,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;
