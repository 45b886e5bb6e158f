use actix_web::{
    web::{self, Data, Form, Path},
    HttpResponse,
};
use log::info;
use serde::Deserialize;
use session_manager::FlashLevel;
use todo_core::{find_list_by_id, validate_todo_title};

use crate::controllers::{render, see_other};
use crate::dto::ListDetailPageDTO;
use crate::error::AppError;
use crate::extract::SessionKey;
use crate::Result;
use crate::TodoStore;

/// Form body for adding a todo
#[derive(Debug, Deserialize)]
pub struct TodoTitleForm {
    pub todo: String,
}

/// Form body for the toggle route; "true" (any casing) completes the todo
#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub completed: String,
}

/// POST /lists/{list_id}/todos
/// Add a todo; a rejected title re-renders the detail page with the error
pub async fn add_todo(
    key: SessionKey,
    path: Path<String>,
    form: Form<TodoTitleForm>,
    store: Data<TodoStore>,
) -> Result<HttpResponse> {
    let list_id = path.into_inner();
    let title = form.todo.trim().to_string();
    let session = store.get_session(key.as_str()).await?;

    let list = find_list_by_id(&list_id, &session.lists)
        .ok_or_else(|| AppError::NotFound("List not found.".to_string()))?;

    if let Err(e) = validate_todo_title(&title) {
        return Ok(render(
            &key,
            &ListDetailPageDTO::new(list, Vec::new(), Some(e.to_string())),
        ));
    }

    let todo = store.add_todo(key.as_str(), &list_id, &title).await?;
    store
        .push_flash(key.as_str(), FlashLevel::Success, "Todo created successfully!")
        .await?;

    info!("Added todo {} ({}) to list {}", todo.title, todo.id, list_id);
    Ok(see_other(&key, format!("/lists/{}", list_id)))
}

/// POST /lists/{list_id}/todos/{todo_id}/toggle
/// Set a todo's completion to the submitted value
pub async fn toggle_todo(
    key: SessionKey,
    path: Path<(String, String)>,
    form: Form<ToggleForm>,
    store: Data<TodoStore>,
) -> Result<HttpResponse> {
    let (list_id, todo_id) = path.into_inner();
    let completed = form.completed.trim().eq_ignore_ascii_case("true");

    store
        .set_todo_completed(key.as_str(), &list_id, &todo_id, completed)
        .await?;
    store
        .push_flash(
            key.as_str(),
            FlashLevel::Success,
            "Todo state changed successfully.",
        )
        .await?;

    info!("Set todo {} in list {} completed={}", todo_id, list_id, completed);
    Ok(see_other(&key, format!("/lists/{}", list_id)))
}

/// POST /lists/{list_id}/todos/{todo_id}/delete
pub async fn delete_todo(
    key: SessionKey,
    path: Path<(String, String)>,
    store: Data<TodoStore>,
) -> Result<HttpResponse> {
    let (list_id, todo_id) = path.into_inner();

    store.delete_todo(key.as_str(), &list_id, &todo_id).await?;
    store
        .push_flash(key.as_str(), FlashLevel::Success, "Todo deleted.")
        .await?;

    info!("Deleted todo {} from list {}", todo_id, list_id);
    Ok(see_other(&key, format!("/lists/{}", list_id)))
}

/// Configure routes. These are registered before the `/lists` scope so
/// the deeper todo paths match ahead of the `/lists/{list_id}` routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/lists/{list_id}/todos", web::post().to(add_todo))
        .route(
            "/lists/{list_id}/todos/{todo_id}/toggle",
            web::post().to(toggle_todo),
        )
        .route(
            "/lists/{list_id}/todos/{todo_id}/delete",
            web::post().to(delete_todo),
        );
}
