//! Title validation for lists and todos

use crate::models::TodoList;
use thiserror::Error;

/// Longest accepted title, in characters
pub const MAX_TITLE_LEN: usize = 100;

/// Why a proposed title was rejected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TitleError {
    #[error("The title must be between 1 and 100 characters")]
    OutOfRange,

    #[error("The title \"{0}\" is already in use")]
    Duplicate(String),
}

/// Validate a proposed list title against the session's existing lists.
///
/// The length check runs before the duplicate scan, so a title that is
/// both too long and a duplicate reports the length error. Callers are
/// expected to trim the title first. The scan covers every list given,
/// so renaming a list to its current title also reports a duplicate.
pub fn validate_list_title(title: &str, lists: &[TodoList]) -> Result<(), TitleError> {
    let len = title.chars().count();
    if len < 1 || len > MAX_TITLE_LEN {
        return Err(TitleError::OutOfRange);
    }
    let lowered = title.to_lowercase();
    if lists.iter().any(|list| list.title.to_lowercase() == lowered) {
        return Err(TitleError::Duplicate(title.to_string()));
    }
    Ok(())
}

/// Validate a proposed todo title: non-empty and at most 100 characters.
pub fn validate_todo_title(title: &str) -> Result<(), TitleError> {
    let len = title.chars().count();
    if len < 1 || len > MAX_TITLE_LEN {
        return Err(TitleError::OutOfRange);
    }
    Ok(())
}
