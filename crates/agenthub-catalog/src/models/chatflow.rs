use serde::{Deserialize, Serialize};

use crate::models::sections::{Documentation, Integration, Media, Pricing, Requirements};

/// A catalog entry for a composed conversational workflow.
///
/// Same shape family as [`crate::models::Agent`], but the nested
/// sections are mandatory and display flags live only in `metadata`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chatflow {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub short_description: String,
    pub category: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
    pub metadata: ChatflowMetadata,
    pub media: Media,
    pub pricing: Pricing,
    pub integration: Integration,
    pub requirements: Requirements,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Documentation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatflowMetadata {
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub new: bool,
    /// ISO-8601 timestamps from the remote API; fixture records may
    /// carry empty placeholders.
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Chatflow {
    pub fn is_featured(&self) -> bool {
        self.metadata.featured
    }

    pub fn is_popular(&self) -> bool {
        self.metadata.popular
    }

    pub fn is_new(&self) -> bool {
        self.metadata.new
    }
}
