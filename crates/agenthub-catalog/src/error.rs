//! Error types for the remote catalog client

use thiserror::Error;

/// Failures surfaced by [`crate::client::RemoteClient`].
///
/// "Not found" is not represented here: a remote 404 on a by-slug
/// lookup is a legitimate negative result and comes back as `Ok(None)`.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
