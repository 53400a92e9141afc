use agenthub_catalog::{ListFilters, Source};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::Value;

use crate::api::state::AppState;
use crate::api_response;
use crate::error::ApiError;

// GET /api/chatflows
pub async fn list_chatflows(
    State(state): State<AppState>,
    Query(filters): Query<ListFilters>,
) -> Json<Value> {
    let listing = state.chatflows.list(&filters).await;
    api_response::success_from(listing.source, listing.items)
}

// GET /api/chatflows/{slug}
pub async fn get_chatflow(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if let Some(found) = state.chatflows.get_by_slug(&slug).await {
        return Ok(api_response::success_from(found.source, found.record));
    }
    match state.chatflows.find_fixture_by_slug(&slug) {
        Some(record) => Ok(api_response::success_from(Source::Fallback, record)),
        None => Err(ApiError::not_found("Chatflow")),
    }
}
