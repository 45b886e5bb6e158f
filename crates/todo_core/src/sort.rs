//! Display ordering: incomplete items first, then alphabetical

use crate::models::{Todo, TodoList};

/// Stable sort on (completed, lowercased title): incomplete entries come
/// first, completed ones last, each group alphabetical case-insensitively.
fn sorted_by_key<'a, T>(
    items: &'a [T],
    is_done: impl Fn(&T) -> bool,
    title_key: impl Fn(&T) -> String,
) -> Vec<&'a T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by_key(|item| (is_done(item), title_key(item)));
    sorted
}

/// Order lists for the index page
pub fn sorted_lists(lists: &[TodoList]) -> Vec<&TodoList> {
    sorted_by_key(
        lists,
        |list| list.is_completed(),
        |list| list.title.to_lowercase(),
    )
}

/// Order todos for the list detail page
pub fn sorted_todos(todos: &[Todo]) -> Vec<&Todo> {
    sorted_by_key(
        todos,
        |todo| todo.completed,
        |todo| todo.title.to_lowercase(),
    )
}
