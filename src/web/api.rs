use crate::{error::AppError, state::AppState};
use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use std::{collections::HashMap, sync::Arc};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/api/i18n/{lang}", get(catalog))
}

/// Health check endpoint
#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    "OK"
}

/// Translation catalog for one language, for client-side lookups
#[axum::debug_handler]
pub async fn catalog(
    State(state): State<Arc<AppState>>,
    Path(language): Path<String>,
) -> Result<Json<HashMap<String, String>>, AppError> {
    let catalog = state
        .catalogs
        .get(&language)
        .ok_or(AppError::UnknownLanguage(language))?;

    Ok(Json(catalog.messages().clone()))
}
