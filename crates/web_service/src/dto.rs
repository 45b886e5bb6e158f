//! View models returned in place of rendered templates
use serde::{Deserialize, Serialize};
use session_manager::{FlashLevel, FlashMessage};
use todo_core::{sorted_todos, Todo, TodoList};

/// A flash message as shown to the user
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FlashDTO {
    pub level: String,
    pub message: String,
}

impl From<FlashMessage> for FlashDTO {
    fn from(flash: FlashMessage) -> Self {
        Self {
            level: match flash.level {
                FlashLevel::Success => "success".to_string(),
                FlashLevel::Error => "error".to_string(),
            },
            message: flash.message,
        }
    }
}

/// One row of the lists index
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ListSummaryDTO {
    pub id: String,
    pub title: String,
    pub todos_count: usize,
    pub todos_remaining: usize,
    pub completed: bool,
}

impl From<&TodoList> for ListSummaryDTO {
    fn from(list: &TodoList) -> Self {
        Self {
            id: list.id.clone(),
            title: list.title.clone(),
            todos_count: list.todos.len(),
            todos_remaining: list.todos_remaining(),
            completed: list.is_completed(),
        }
    }
}

/// A single todo row
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TodoItemDTO {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

impl From<&Todo> for TodoItemDTO {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id.clone(),
            title: todo.title.clone(),
            completed: todo.completed,
        }
    }
}

/// The lists index page
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ListsPageDTO {
    pub flashes: Vec<FlashDTO>,
    pub lists: Vec<ListSummaryDTO>,
}

/// The detail page of one list, todos in display order
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ListDetailPageDTO {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub todos_remaining: usize,
    pub todos: Vec<TodoItemDTO>,
    pub flashes: Vec<FlashDTO>,
    /// Set when a todo submission was rejected and the page re-renders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ListDetailPageDTO {
    pub fn new(list: &TodoList, flashes: Vec<FlashMessage>, error: Option<String>) -> Self {
        Self {
            id: list.id.clone(),
            title: list.title.clone(),
            completed: list.is_completed(),
            todos_remaining: list.todos_remaining(),
            todos: sorted_todos(&list.todos).into_iter().map(Into::into).collect(),
            flashes: flashes.into_iter().map(Into::into).collect(),
            error,
        }
    }
}

/// The new-list / edit-list form, echoed back on validation failure
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ListFormDTO {
    /// Id of the list being edited; absent for the new-list form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_summary_reports_remaining() {
        let mut list = TodoList::new("Groceries");
        list.todos.push(Todo::new("Milk"));
        let mut done = Todo::new("Eggs");
        done.completed = true;
        list.todos.push(done);

        let dto = ListSummaryDTO::from(&list);
        assert_eq!(dto.todos_count, 2);
        assert_eq!(dto.todos_remaining, 1);
        assert!(!dto.completed);
    }

    #[test]
    fn test_detail_page_sorts_todos() {
        let mut list = TodoList::new("Groceries");
        let mut done = Todo::new("Apples");
        done.completed = true;
        list.todos.push(done);
        list.todos.push(Todo::new("bananas"));

        let dto = ListDetailPageDTO::new(&list, Vec::new(), None);
        assert_eq!(dto.todos[0].title, "bananas");
        assert_eq!(dto.todos[1].title, "Apples");
    }

    #[test]
    fn test_flash_levels_serialize_as_strings() {
        let dto: FlashDTO = FlashMessage {
            level: FlashLevel::Error,
            message: "nope".to_string(),
        }
        .into();
        assert_eq!(dto.level, "error");
    }
}
