use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    UnknownLanguage(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::UnknownLanguage(language) => {
                tracing::debug!("No catalog for language '{}'", language);
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": format!("unknown language '{language}'") })),
                )
                    .into_response()
            }
        }
    }
}
