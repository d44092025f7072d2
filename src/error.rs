use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

use crate::views;

#[derive(Debug, ThisError)]
pub enum CafeError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Cafe name already listed: {0}")]
    NameTaken(String),

    #[error("No cafe with id {0}")]
    NotFound(i64),

    #[error("Form token missing or stale")]
    TokenMismatch,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntoResponse for CafeError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            CafeError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                views::not_found_page(&format!("No cafe with id {id}.")),
            ),
            // Normally converted to a field-level form error by the create
            // handler; answered directly only if it escapes that path.
            CafeError::NameTaken(name) => (
                StatusCode::CONFLICT,
                views::error_page(&format!("\"{name}\" is already listed.")),
            ),
            CafeError::TokenMismatch => (
                StatusCode::FORBIDDEN,
                views::error_page("The form has expired. Go back and try again."),
            ),
            CafeError::Database(_) | CafeError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                views::error_page("An internal server error occurred."),
            ),
        };
        (status, Html(body)).into_response()
    }
}
