//! # Todo Core
//!
//! Pure domain logic for the to-do list service: list/todo models,
//! title validation, id lookup, and the display sort order.
//! No I/O and no async; everything here is directly unit-testable.

pub mod lookup;
pub mod models;
pub mod sort;
pub mod validate;

// Re-exports
pub use lookup::{find_list_by_id, find_list_by_id_mut, find_todo_by_id, find_todo_by_id_mut};
pub use models::{Todo, TodoList};
pub use sort::{sorted_lists, sorted_todos};
pub use validate::{validate_list_title, validate_todo_title, TitleError};
