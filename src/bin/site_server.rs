// Site server entry point
//
// Usage: cargo run --bin site_server
// Configuration: HOST, PORT, STATIC_DIR, PAGE_CACHE_CAPACITY, PAGE_CACHE_TTL_SECS

use hc1_site::{create_router, AppState, SiteConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "hc1_site=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting site server...");

    let config = SiteConfig::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  HOST: {}", config.host);
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  STATIC_DIR: {}", config.static_dir.display());
    tracing::info!("  PAGE_CACHE_CAPACITY: {}", config.page_cache_capacity);
    tracing::info!("  PAGE_CACHE_TTL_SECS: {}", config.page_cache_ttl.as_secs());

    // Builds the catalog and message tables; refuses to start on content defects
    tracing::info!("Initializing application state...");
    let addr = config.addr();
    let state = AppState::new(config).await?;
    tracing::info!("Application state initialized successfully");

    let app = create_router(state);

    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
