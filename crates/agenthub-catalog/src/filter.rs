//! Shared list-filtering semantics for catalog collections.
//!
//! The same predicate runs against remote query forwarding and the
//! local fixture fallback, so both sources filter identically.

use serde::Deserialize;

use crate::models::{Agent, Chatflow};

/// Uniform view over catalog record types for filtering and relation
/// lookups. Flag accessors hide the flat-vs-nested inconsistency of
/// the agent dataset.
pub trait CatalogRecord {
    fn id(&self) -> &str;
    fn slug(&self) -> &str;
    fn category(&self) -> &str;
    fn is_featured(&self) -> bool;
    fn is_popular(&self) -> bool;
    fn is_new(&self) -> bool;
}

impl CatalogRecord for Agent {
    fn id(&self) -> &str {
        &self.id
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn is_featured(&self) -> bool {
        Agent::is_featured(self)
    }
    fn is_popular(&self) -> bool {
        Agent::is_popular(self)
    }
    fn is_new(&self) -> bool {
        Agent::is_new(self)
    }
}

impl CatalogRecord for Chatflow {
    fn id(&self) -> &str {
        &self.id
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn is_featured(&self) -> bool {
        Chatflow::is_featured(self)
    }
    fn is_popular(&self) -> bool {
        Chatflow::is_popular(self)
    }
    fn is_new(&self) -> bool {
        Chatflow::is_new(self)
    }
}

/// Optional list filters, deserializable straight from a query string.
///
/// Boolean filters restrict only when the literal string `"true"` is
/// supplied; any other value (or absence) imposes no restriction.
/// Filters compose by logical AND.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFilters {
    pub category: Option<String>,
    pub featured: Option<String>,
    pub popular: Option<String>,
    pub new: Option<String>,
    /// Comma-separated internal ids; output keeps collection order,
    /// not the order given here.
    pub ids: Option<String>,
}

impl ListFilters {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn featured() -> Self {
        Self {
            featured: Some("true".to_string()),
            ..Self::default()
        }
    }

    pub fn popular() -> Self {
        Self {
            popular: Some("true".to_string()),
            ..Self::default()
        }
    }

    pub fn new_only() -> Self {
        Self {
            new: Some("true".to_string()),
            ..Self::default()
        }
    }

    /// Query pairs forwarded verbatim to the remote API.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref category) = self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(ref featured) = self.featured {
            pairs.push(("featured", featured.clone()));
        }
        if let Some(ref popular) = self.popular {
            pairs.push(("popular", popular.clone()));
        }
        if let Some(ref new) = self.new {
            pairs.push(("new", new.clone()));
        }
        if let Some(ref ids) = self.ids {
            pairs.push(("ids", ids.clone()));
        }
        pairs
    }

    /// AND-composed predicate over a single record.
    pub fn matches<T: CatalogRecord>(&self, record: &T) -> bool {
        if let Some(ref category) = self.category {
            if !record.category().eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if flag_requested(&self.featured) && !record.is_featured() {
            return false;
        }
        if flag_requested(&self.popular) && !record.is_popular() {
            return false;
        }
        if flag_requested(&self.new) && !record.is_new() {
            return false;
        }
        if let Some(ref ids) = self.ids {
            if !ids.split(',').map(str::trim).any(|id| id == record.id()) {
                return false;
            }
        }
        true
    }

    /// Filter a collection, preserving its natural order.
    pub fn apply<T: CatalogRecord + Clone>(&self, records: &[T]) -> Vec<T> {
        records
            .iter()
            .filter(|record| self.matches(*record))
            .cloned()
            .collect()
    }
}

fn flag_requested(value: &Option<String>) -> bool {
    value.as_deref() == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn filters_compose_with_and_semantics() {
        let agents = fixtures::agents();
        let filters = ListFilters {
            category: Some("Data Analysis".to_string()),
            featured: Some("true".to_string()),
            ..ListFilters::default()
        };
        let matched = filters.apply(&agents);
        let slugs: Vec<&str> = matched.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["data-analyzer"]);
    }

    #[test]
    fn category_comparison_is_case_insensitive() {
        let agents = fixtures::agents();
        let lower = ListFilters::category("data analysis").apply(&agents);
        let exact = ListFilters::category("Data Analysis").apply(&agents);
        assert!(!lower.is_empty());
        assert_eq!(
            lower.iter().map(|a| &a.slug).collect::<Vec<_>>(),
            exact.iter().map(|a| &a.slug).collect::<Vec<_>>()
        );
    }

    #[test]
    fn ids_filter_keeps_collection_order() {
        let chatflows = fixtures::chatflows();
        let forward = ListFilters {
            ids: Some("chatflow1,chatflow2".to_string()),
            ..ListFilters::default()
        };
        let reversed = ListFilters {
            ids: Some("chatflow2,chatflow1".to_string()),
            ..ListFilters::default()
        };
        let forward_matches = forward.apply(&chatflows);
        let reversed_matches = reversed.apply(&chatflows);
        let a: Vec<&str> = forward_matches.iter().map(|c| c.id.as_str()).collect();
        let b: Vec<&str> = reversed_matches.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(a, vec!["chatflow1", "chatflow2"]);
        assert_eq!(a, b);
    }

    #[test]
    fn non_true_flag_values_do_not_restrict() {
        let agents = fixtures::agents();
        let filters = ListFilters {
            featured: Some("false".to_string()),
            ..ListFilters::default()
        };
        assert_eq!(filters.apply(&agents).len(), agents.len());
    }

    #[test]
    fn nested_agent_flags_count_for_filtering() {
        let agents = fixtures::agents();
        let featured = ListFilters::featured().apply(&agents);
        // content-writer carries its flag only inside metadata
        assert!(featured.iter().any(|a| a.slug == "content-writer"));
    }
}
