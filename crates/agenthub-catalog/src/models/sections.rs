//! Nested catalog-record sections shared by agents and chatflows.
//!
//! Optional on [`crate::models::Agent`], required on
//! [`crate::models::Chatflow`]. Fixture data leaves most string fields
//! as empty placeholders; treat them as display hints, not contracts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Documentation {
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub setup_guide: String,
    #[serde(default)]
    pub api_reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub banner: String,
    #[serde(default)]
    pub screenshots: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    /// Billing model label, e.g. "free", "subscription", "usage".
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    #[serde(default)]
    pub api_endpoint: String,
    #[serde(default)]
    pub supported_platforms: Vec<String>,
    #[serde(default)]
    pub webhook_support: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub minimum_plan: String,
}
