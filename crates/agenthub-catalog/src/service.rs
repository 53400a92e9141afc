//! Resource-oriented catalog services with live/fallback resolution.
//!
//! Callers never observe a remote-transport failure: every operation
//! catches client errors and substitutes the embedded fixture
//! collection, applying the same filter semantics locally. Results are
//! tagged with their [`Source`] so tests and operators can tell a
//! degraded response from a healthy one.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::client::RemoteClient;
use crate::filter::{CatalogRecord, ListFilters};
use crate::fixtures;
use crate::models::{Agent, Chatflow};

/// Maximum records returned by a related-items lookup.
const RELATED_LIMIT: usize = 3;

/// Where a catalog result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Live,
    Fallback,
}

/// A collection result tagged with its origin.
#[derive(Debug, Clone, Serialize)]
pub struct Listing<T> {
    pub source: Source,
    pub items: Vec<T>,
}

/// A single-record result tagged with its origin.
#[derive(Debug, Clone, Serialize)]
pub struct Sourced<T> {
    pub source: Source,
    pub record: T,
}

/// Facade over one remote catalog resource plus its fixture fallback.
///
/// The fixture collection is injected at construction; the service
/// holds no other state and is cheap to clone.
#[derive(Debug, Clone)]
pub struct CatalogService<T> {
    client: RemoteClient,
    resource: &'static str,
    fixtures: Arc<Vec<T>>,
}

impl CatalogService<Agent> {
    /// Agent service backed by the embedded agent fixtures.
    pub fn agents(client: RemoteClient) -> Self {
        Self::new(client, "agent", fixtures::agents())
    }
}

impl CatalogService<Chatflow> {
    /// Chatflow service backed by the embedded chatflow fixtures.
    pub fn chatflows(client: RemoteClient) -> Self {
        Self::new(client, "chatflow", fixtures::chatflows())
    }
}

impl<T> CatalogService<T>
where
    T: CatalogRecord + DeserializeOwned + Clone,
{
    pub fn new(client: RemoteClient, resource: &'static str, fixtures: Vec<T>) -> Self {
        Self {
            client,
            resource,
            fixtures: Arc::new(fixtures),
        }
    }

    /// List the collection, forwarding filters to the remote API.
    ///
    /// On any client failure the same predicate runs over the fixture
    /// collection instead; the empty list is returned only when the
    /// fallback legitimately has zero matches.
    pub async fn list(&self, filters: &ListFilters) -> Listing<T> {
        match self
            .client
            .list::<T>(self.resource, &filters.to_query_pairs())
            .await
        {
            Ok(items) => Listing {
                source: Source::Live,
                items,
            },
            Err(e) => {
                warn!(resource = self.resource, error = %e, "remote list failed, serving fixtures");
                Listing {
                    source: Source::Fallback,
                    items: filters.apply(&self.fixtures),
                }
            }
        }
    }

    /// Look up a single record by slug.
    ///
    /// A remote 404 is a real negative and returns `None` without
    /// touching the fixtures; only transport/status/decode failures
    /// trigger the fixture search.
    pub async fn get_by_slug(&self, slug: &str) -> Option<Sourced<T>> {
        match self.client.get_by_slug::<T>(self.resource, slug).await {
            Ok(Some(record)) => Some(Sourced {
                source: Source::Live,
                record,
            }),
            Ok(None) => None,
            Err(e) => {
                warn!(resource = self.resource, slug, error = %e, "remote lookup failed, searching fixtures");
                self.find_fixture_by_slug(slug).map(|record| Sourced {
                    source: Source::Fallback,
                    record,
                })
            }
        }
    }

    pub async fn list_featured(&self) -> Listing<T> {
        self.list(&ListFilters::featured()).await
    }

    pub async fn list_popular(&self) -> Listing<T> {
        self.list(&ListFilters::popular()).await
    }

    pub async fn list_new(&self) -> Listing<T> {
        self.list(&ListFilters::new_only()).await
    }

    pub async fn list_by_category(&self, category: &str) -> Listing<T> {
        self.list(&ListFilters::category(category)).await
    }

    /// Up to [`RELATED_LIMIT`] records sharing `category`, excluding
    /// the record identified by `exclude_id`, in collection order.
    pub async fn list_related(&self, category: &str, exclude_id: &str) -> Listing<T> {
        let listing = self.list(&ListFilters::category(category)).await;
        Listing {
            source: listing.source,
            items: listing
                .items
                .into_iter()
                .filter(|record| record.id() != exclude_id)
                .take(RELATED_LIMIT)
                .collect(),
        }
    }

    /// Direct fixture search by slug, used by routes to map a remote
    /// 404 through the fallback collection before emitting a real 404.
    pub fn find_fixture_by_slug(&self, slug: &str) -> Option<T> {
        self.fixtures.iter().find(|r| r.slug() == slug).cloned()
    }
}
