use agenthub_catalog::Source;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// Create a success response carrying the live/fallback origin tag
pub fn success_from<T: Serialize>(source: Source, data: T) -> Json<Value> {
    Json(serde_json::json!({
        "status": "success",
        "source": source,
        "data": data
    }))
}
