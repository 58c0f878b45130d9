//! Blog Post HTTP Server
//!
//! Serves CRUD, sort and search operations over an in-memory post collection.

use anyhow::Result;
use blog_server::api::create_router;
use blog_server::config::ServerConfig;
use blog_store::{MemoryPostStore, PostRepository};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config)?;
    info!("Loaded configuration: {:?}", config);

    // Initialize post store
    let store = if config.seed_posts {
        MemoryPostStore::with_seed_posts()
    } else {
        MemoryPostStore::new()
    };
    let store: Arc<dyn PostRepository> = Arc::new(store);
    if store.is_empty().await {
        info!("Post store initialized empty");
    } else {
        info!("Post store initialized with {} posts", store.len().await);
    }

    let app = create_router(store);

    // Start server
    let addr = config.bind_addr();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Posts API: http://{}/api/posts", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(config: &ServerConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(config.json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!config.json_logs).then(|| tracing_subscriber::fmt::layer()))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
