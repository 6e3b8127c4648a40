//! Binary entry point: configuration, store preparation, router, serve.

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use drift_monitor::{config::Config, create_router, db, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "drift_monitor=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("Drift monitoring server starting ({})...", config.environment);
    tracing::info!(
        "Store: {}",
        config.database_url.split('@').last().unwrap_or("***")
    );

    if config.mock_mode {
        tracing::info!("Mock mode enabled: serving synthetic data only");
    } else if let Err(err) = db::prepare_store(&config).await {
        tracing::warn!("Store preparation failed, continuing with fallback data: {err}");
    }

    // Build application state and router
    let state = AppState {
        config: config.clone(),
    };
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
