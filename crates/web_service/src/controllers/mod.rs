pub mod list_controller;
pub mod todo_controller;

use crate::extract::{SessionKey, SESSION_HEADER};
use actix_web::{http::header, HttpResponse};
use serde::Serialize;

/// 303 redirect to a canonical view after a successful mutation.
/// The session key is echoed so first-visit clients can keep it.
pub(crate) fn see_other(key: &SessionKey, location: impl Into<String>) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.into()))
        .insert_header((SESSION_HEADER, key.as_str()))
        .finish()
}

/// 200 with a view model, in place of a rendered template
pub(crate) fn render<T: Serialize>(key: &SessionKey, body: &T) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((SESSION_HEADER, key.as_str()))
        .json(body)
}
