use agenthub_catalog::RemoteClient;
use agenthub_server::{AppState, ServerConfig, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing logger
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,agenthub_server=debug".into()),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(api_url = %config.api_url, "Starting AgentHub catalog server");

    let state = AppState::new(RemoteClient::new(&config.api_url));
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("AgentHub running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
