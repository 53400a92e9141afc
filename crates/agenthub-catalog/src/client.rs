//! HTTP client for the remote catalog API.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ClientError, Result};

/// Placeholder default used when no base URL is configured. The
/// production address is always supplied via `AGENTHUB_API_URL`.
pub const DEFAULT_API_URL: &str = "http://localhost:4010/api/v1";

/// Request timeout ceiling, fixed at client construction.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin typed wrapper over the remote catalog API.
///
/// Performs one outbound call per operation and returns the decoded
/// body unchanged. No retries, no caching, no deduplication; any
/// non-2xx status (other than a by-slug 404) or transport failure is
/// surfaced to the caller as an error.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: Client,
    base_url: String,
}

impl RemoteClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            // A default client would silently drop the timeout
            // ceiling; builder failure must abort at startup instead.
            http: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .user_agent("AgentHub/1.0")
                .build()
                .expect("http client construction"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a resource collection, forwarding the given query pairs.
    pub async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, resource);
        let response = self.http.get(&url).query(query).send().await?;
        let response = check_status(response).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Fetch a single record by slug. A remote 404 is a legitimate
    /// negative result and comes back as `Ok(None)`.
    pub async fn get_by_slug<T: DeserializeOwned>(
        &self,
        resource: &str,
        slug: &str,
    ) -> Result<Option<T>> {
        let url = format!("{}/{}/{}", self.base_url, resource, slug);
        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check_status(response).await?;
        let record = response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(Some(record))
    }

    /// POST a payload to a resource endpoint and decode the response.
    pub async fn submit<B: Serialize, T: DeserializeOwned>(
        &self,
        resource: &str,
        payload: &B,
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, resource);
        let response = self.http.post(&url).json(payload).send().await?;
        let response = check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}
