use agenthub_catalog::OnboardRequest;
use axum::{Json, extract::State};
use serde_json::Value;

use crate::api::state::AppState;
use crate::api_response;
use crate::error::ApiError;

// POST /api/onboarduser
pub async fn onboard_user(
    State(state): State<AppState>,
    Json(request): Json<OnboardRequest>,
) -> Result<Json<Value>, ApiError> {
    if request.email.trim().is_empty() {
        return Err(ApiError::bad_request("email is required"));
    }

    let ack = state.onboarding.submit(request).await;
    Ok(api_response::success_from(ack.source, ack.record))
}
