use agenthub_catalog::{
    Agent, CatalogService, Chatflow, OnboardingService, RemoteClient,
};

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    pub agents: CatalogService<Agent>,
    pub chatflows: CatalogService<Chatflow>,
    pub onboarding: OnboardingService,
}

impl AppState {
    /// Wire all services against one remote client configuration.
    pub fn new(client: RemoteClient) -> Self {
        Self {
            agents: CatalogService::agents(client.clone()),
            chatflows: CatalogService::chatflows(client.clone()),
            onboarding: OnboardingService::new(client),
        }
    }
}
