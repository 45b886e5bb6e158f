pub mod config;
pub mod controllers;
pub mod dto;
pub mod error;
pub mod extract;
pub mod server;

pub use error::{AppError, Result};
pub use server::WebService;

use session_manager::{FileSessionStorage, SessionManager};

/// The session manager shared by every handler
pub type TodoStore = SessionManager<FileSessionStorage>;
