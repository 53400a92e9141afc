use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Onboarding form payload relayed to the remote catalog API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Internal ids of the agents the user is interested in.
    #[serde(default)]
    pub agent_ids: Vec<String>,
}

/// Submission acknowledgment returned by the remote API, or minted
/// locally when the remote is unreachable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardAck {
    pub id: String,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
}
