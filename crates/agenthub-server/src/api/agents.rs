use agenthub_catalog::{ListFilters, Source};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::Value;

use crate::api::state::AppState;
use crate::api_response;
use crate::error::ApiError;

// GET /api/agents
pub async fn list_agents(
    State(state): State<AppState>,
    Query(filters): Query<ListFilters>,
) -> Json<Value> {
    let listing = state.agents.list(&filters).await;
    api_response::success_from(listing.source, listing.items)
}

// GET /api/agents/{slug}
pub async fn get_agent(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if let Some(found) = state.agents.get_by_slug(&slug).await {
        return Ok(api_response::success_from(found.source, found.record));
    }
    // A remote 404 maps through the fixture collection before it
    // becomes a real 404.
    match state.agents.find_fixture_by_slug(&slug) {
        Some(record) => Ok(api_response::success_from(Source::Fallback, record)),
        None => Err(ApiError::not_found("Agent")),
    }
}

// GET /api/agents/{slug}/related
pub async fn related_agents(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let agent = match state.agents.get_by_slug(&slug).await {
        Some(found) => found.record,
        None => state
            .agents
            .find_fixture_by_slug(&slug)
            .ok_or_else(|| ApiError::not_found("Agent"))?,
    };

    let listing = state.agents.list_related(&agent.category, &agent.id).await;
    Ok(api_response::success_from(listing.source, listing.items))
}
