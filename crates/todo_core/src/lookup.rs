//! Id-based lookup over session collections

use crate::models::{Todo, TodoList};

/// Find a list by id. Linear scan; sessions hold few lists.
pub fn find_list_by_id<'a>(id: &str, lists: &'a [TodoList]) -> Option<&'a TodoList> {
    lists.iter().find(|list| list.id == id)
}

/// Mutable variant of [`find_list_by_id`]
pub fn find_list_by_id_mut<'a>(id: &str, lists: &'a mut [TodoList]) -> Option<&'a mut TodoList> {
    lists.iter_mut().find(|list| list.id == id)
}

/// Find a todo by id within a list's items
pub fn find_todo_by_id<'a>(id: &str, todos: &'a [Todo]) -> Option<&'a Todo> {
    todos.iter().find(|todo| todo.id == id)
}

/// Mutable variant of [`find_todo_by_id`]
pub fn find_todo_by_id_mut<'a>(id: &str, todos: &'a mut [Todo]) -> Option<&'a mut Todo> {
    todos.iter_mut().find(|todo| todo.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_list_by_id() {
        let lists = vec![TodoList::new("A"), TodoList::new("B")];
        let id = lists[1].id.clone();

        let found = find_list_by_id(&id, &lists).unwrap();
        assert_eq!(found.title, "B");

        assert!(find_list_by_id("missing", &lists).is_none());
    }

    #[test]
    fn test_find_todo_by_id() {
        let todos = vec![Todo::new("Milk"), Todo::new("Eggs")];
        let id = todos[0].id.clone();

        let found = find_todo_by_id(&id, &todos).unwrap();
        assert_eq!(found.title, "Milk");

        assert!(find_todo_by_id("missing", &todos).is_none());
    }

    #[test]
    fn test_find_mut_allows_in_place_edit() {
        let mut lists = vec![TodoList::new("A")];
        let id = lists[0].id.clone();

        find_list_by_id_mut(&id, &mut lists).unwrap().title = "Renamed".to_string();
        assert_eq!(lists[0].title, "Renamed");
    }
}
