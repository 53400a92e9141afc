//! Local proxy surface for the AgentHub UI.
//!
//! Thin axum layer over the catalog services: listing and onboarding
//! routes always answer 200 (falling back to fixture data on upstream
//! failure), by-slug misses answer a real 404.

pub mod api;
pub mod api_response;
pub mod config;
pub mod error;

pub use api::AppState;
pub use config::ServerConfig;
pub use error::ApiError;

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use api::{agents, chatflows, onboarding};

#[derive(serde::Serialize)]
struct Health {
    status: String,
}

async fn health() -> axum::Json<Health> {
    axum::Json(Health {
        status: "agenthub is working!".to_string(),
    })
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/api/agents", get(agents::list_agents))
        .route("/api/agents/{slug}", get(agents::get_agent))
        .route("/api/agents/{slug}/related", get(agents::related_agents))
        .route("/api/chatflows", get(chatflows::list_chatflows))
        .route("/api/chatflows/{slug}", get(chatflows::get_chatflow))
        .route("/api/onboarduser", post(onboarding::onboard_user))
        .layer(cors)
        .with_state(state)
}
