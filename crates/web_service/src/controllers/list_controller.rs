use actix_web::{
    web::{self, Data, Form, Path},
    HttpResponse,
};
use log::info;
use serde::Deserialize;
use session_manager::FlashLevel;
use todo_core::{find_list_by_id, sorted_lists, validate_list_title};

use crate::controllers::{render, see_other};
use crate::dto::{ListDetailPageDTO, ListFormDTO, ListsPageDTO};
use crate::error::AppError;
use crate::extract::SessionKey;
use crate::Result;
use crate::TodoStore;

/// Form body for creating or renaming a list
#[derive(Debug, Deserialize)]
pub struct ListTitleForm {
    pub list_title: String,
}

/// GET /
/// The site root just forwards to the lists index
pub async fn index(key: SessionKey) -> HttpResponse {
    see_other(&key, "/lists")
}

/// GET /lists
/// All lists, incomplete first, with pending flash messages
pub async fn lists_page(key: SessionKey, store: Data<TodoStore>) -> Result<HttpResponse> {
    let flashes = store.take_flashes(key.as_str()).await?;
    let session = store.get_session(key.as_str()).await?;

    let page = ListsPageDTO {
        flashes: flashes.into_iter().map(Into::into).collect(),
        lists: sorted_lists(&session.lists)
            .into_iter()
            .map(Into::into)
            .collect(),
    };

    Ok(render(&key, &page))
}

/// POST /lists
/// Create a list; a rejected title re-renders the form with the error
pub async fn create_list(
    key: SessionKey,
    form: Form<ListTitleForm>,
    store: Data<TodoStore>,
) -> Result<HttpResponse> {
    let title = form.list_title.trim().to_string();
    let session = store.get_session(key.as_str()).await?;

    if let Err(e) = validate_list_title(&title, &session.lists) {
        return Ok(render(
            &key,
            &ListFormDTO {
                id: None,
                title,
                error: Some(e.to_string()),
            },
        ));
    }

    let list = store.create_list(key.as_str(), &title).await?;
    store
        .push_flash(
            key.as_str(),
            FlashLevel::Success,
            format!("{} has been added!", title),
        )
        .await?;

    info!("Created list {} ({})", list.title, list.id);
    Ok(see_other(&key, "/lists"))
}

/// GET /lists/new
/// A blank new-list form
pub async fn new_list_form(key: SessionKey) -> HttpResponse {
    render(
        &key,
        &ListFormDTO {
            id: None,
            title: String::new(),
            error: None,
        },
    )
}

/// GET /lists/{list_id}
/// One list with its todos in display order; 404 for an unknown id
pub async fn list_detail(
    key: SessionKey,
    path: Path<String>,
    store: Data<TodoStore>,
) -> Result<HttpResponse> {
    let list_id = path.into_inner();
    let flashes = store.take_flashes(key.as_str()).await?;
    let session = store.get_session(key.as_str()).await?;

    let list = find_list_by_id(&list_id, &session.lists)
        .ok_or_else(|| AppError::NotFound("List not found.".to_string()))?;

    Ok(render(&key, &ListDetailPageDTO::new(list, flashes, None)))
}

/// GET /lists/{list_id}/edit
/// The rename form, pre-filled with the current title
pub async fn edit_list_form(
    key: SessionKey,
    path: Path<String>,
    store: Data<TodoStore>,
) -> Result<HttpResponse> {
    let list_id = path.into_inner();
    let session = store.get_session(key.as_str()).await?;

    let list = find_list_by_id(&list_id, &session.lists)
        .ok_or_else(|| AppError::NotFound("List not found.".to_string()))?;

    Ok(render(
        &key,
        &ListFormDTO {
            id: Some(list.id.clone()),
            title: list.title.clone(),
            error: None,
        },
    ))
}

/// POST /lists/{list_id}/edit
/// Rename a list; validation scans every list, so renaming to the
/// current title also reports a duplicate
pub async fn edit_list(
    key: SessionKey,
    path: Path<String>,
    form: Form<ListTitleForm>,
    store: Data<TodoStore>,
) -> Result<HttpResponse> {
    let list_id = path.into_inner();
    let title = form.list_title.trim().to_string();
    let session = store.get_session(key.as_str()).await?;

    find_list_by_id(&list_id, &session.lists)
        .ok_or_else(|| AppError::NotFound("List not found.".to_string()))?;

    if let Err(e) = validate_list_title(&title, &session.lists) {
        return Ok(render(
            &key,
            &ListFormDTO {
                id: Some(list_id),
                title,
                error: Some(e.to_string()),
            },
        ));
    }

    store.rename_list(key.as_str(), &list_id, &title).await?;
    store
        .push_flash(
            key.as_str(),
            FlashLevel::Success,
            "List title changed successfully",
        )
        .await?;

    info!("Renamed list {} to {}", list_id, title);
    Ok(see_other(&key, format!("/lists/{}", list_id)))
}

/// POST /lists/{list_id}/delete
pub async fn delete_list(
    key: SessionKey,
    path: Path<String>,
    store: Data<TodoStore>,
) -> Result<HttpResponse> {
    let list_id = path.into_inner();

    let removed = store.delete_list(key.as_str(), &list_id).await?;
    store
        .push_flash(
            key.as_str(),
            FlashLevel::Success,
            format!("List \"{}\" deleted successfully.", removed.title),
        )
        .await?;

    info!("Deleted list {} ({})", removed.title, list_id);
    Ok(see_other(&key, "/lists"))
}

/// POST /lists/{list_id}/complete_all
pub async fn complete_all(
    key: SessionKey,
    path: Path<String>,
    store: Data<TodoStore>,
) -> Result<HttpResponse> {
    let list_id = path.into_inner();

    store.complete_all(key.as_str(), &list_id).await?;
    store
        .push_flash(
            key.as_str(),
            FlashLevel::Success,
            "All todos marked as completed!",
        )
        .await?;

    info!("Completed all todos in list {}", list_id);
    Ok(see_other(&key, format!("/lists/{}", list_id)))
}

/// Configure routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
    cfg.service(
        web::scope("/lists")
            .route("", web::get().to(lists_page))
            .route("", web::post().to(create_list))
            .route("/new", web::get().to(new_list_form))
            .route("/{list_id}", web::get().to(list_detail))
            .route("/{list_id}/edit", web::get().to(edit_list_form))
            .route("/{list_id}/edit", web::post().to(edit_list))
            .route("/{list_id}/delete", web::post().to(delete_list))
            .route("/{list_id}/complete_all", web::post().to(complete_all)),
    );
}
