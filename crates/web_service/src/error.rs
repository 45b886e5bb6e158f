use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use session_manager::SessionError;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("Session error: {0}")]
    Session(SessionError),
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::ListNotFound => AppError::NotFound("List not found.".to_string()),
            SessionError::TodoNotFound => AppError::NotFound("Todo not found.".to_string()),
            other => AppError::Session(other),
        }
    }
}

#[derive(Serialize)]
struct JsonError {
    message: String,
    r#type: String,
}

#[derive(Serialize)]
struct JsonErrorWrapper {
    error: JsonError,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let kind = match self {
            AppError::NotFound(_) => "not_found",
            AppError::Session(_) => "api_error",
        };
        let error_response = JsonErrorWrapper {
            error: JsonError {
                message: self.to_string(),
                r#type: kind.to_string(),
            },
        };
        HttpResponse::build(status_code).json(error_response)
    }
}
