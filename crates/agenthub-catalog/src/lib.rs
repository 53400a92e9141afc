//! Data-access layer for the AgentHub catalog.
//!
//! Wraps the remote catalog API behind resource-oriented services that
//! fall back to embedded fixture data when the remote is unreachable,
//! so the catalog always renders something.

pub mod client;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod models;
pub mod onboarding;
pub mod service;

pub use client::{RemoteClient, DEFAULT_API_URL};
pub use error::ClientError;
pub use filter::{CatalogRecord, ListFilters};
pub use models::{Agent, Chatflow, OnboardAck, OnboardRequest};
pub use onboarding::OnboardingService;
pub use service::{CatalogService, Listing, Source, Sourced};
