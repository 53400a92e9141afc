use serde::{Deserialize, Serialize};

use crate::models::sections::{Documentation, Integration, Media, Pricing, Requirements};

/// A catalog entry for a single deployable AI capability.
///
/// The remote dataset is inconsistent about where display flags live:
/// some records carry them as top-level booleans, others nest them in
/// `metadata`. The `is_*` accessors normalize the dual lookup; filter
/// code must go through them rather than reading fields directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Internal identity, used for relation lookups (related-agent
    /// exclusion, onboarding `agentIds`).
    pub id: String,
    /// External identity used in all route paths; unique per collection.
    pub slug: String,
    pub name: String,
    pub description: String,
    pub short_description: String,
    pub category: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Top-level flag location; may instead live in `metadata`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AgentMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Documentation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<Pricing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration: Option<Integration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Requirements>,
}

/// Nested flag/rating block, optional on agents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
}

impl Agent {
    /// True when the flag is set either top-level or in `metadata`.
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
            || self.metadata.as_ref().is_some_and(|m| m.featured.unwrap_or(false))
    }

    pub fn is_popular(&self) -> bool {
        self.popular.unwrap_or(false)
            || self.metadata.as_ref().is_some_and(|m| m.popular.unwrap_or(false))
    }

    pub fn is_new(&self) -> bool {
        self.new.unwrap_or(false)
            || self.metadata.as_ref().is_some_and(|m| m.new.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_accessors_check_both_locations() {
        let flat: Agent = serde_json::from_value(serde_json::json!({
            "id": "a1",
            "slug": "a1",
            "name": "A1",
            "description": "",
            "shortDescription": "",
            "category": "Test",
            "featured": true
        }))
        .unwrap();
        assert!(flat.is_featured());
        assert!(!flat.is_popular());

        let nested: Agent = serde_json::from_value(serde_json::json!({
            "id": "a2",
            "slug": "a2",
            "name": "A2",
            "description": "",
            "shortDescription": "",
            "category": "Test",
            "metadata": { "featured": true, "new": true }
        }))
        .unwrap();
        assert!(nested.is_featured());
        assert!(nested.is_new());
        assert!(!nested.is_popular());
    }

    #[test]
    fn wire_format_is_camel_case() {
        let agent: Agent = serde_json::from_value(serde_json::json!({
            "id": "a3",
            "slug": "a3",
            "name": "A3",
            "description": "desc",
            "shortDescription": "short",
            "category": "Test"
        }))
        .unwrap();
        assert_eq!(agent.short_description, "short");

        let value = serde_json::to_value(&agent).unwrap();
        assert!(value.get("shortDescription").is_some());
        assert!(value.get("short_description").is_none());
    }
}
