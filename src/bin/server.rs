//! RepCurve HTTP Server Binary
//!
//! This is the main entry point for the RepCurve REST API server.
//! It initializes the repository, seeds the exercise catalog, sets up the
//! HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin repcurve-server --features "local-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REPOSITORY_TYPE`: Storage backend (default: local)
//! - `SEED_CATALOG`: Seed the default exercise catalog on startup (default: 1)
//! - `REPCURVE_CONFIG`: Path to a TOML config file overriding the above
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use repcurve::db;
use repcurve::db::RepositoryConfig;
use repcurve::http::{create_router, AppState};
use repcurve::services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting RepCurve HTTP Server");

    // Initialize global repository once and reuse it across the app
    db::init_repository().map_err(|e| anyhow::anyhow!(e))?;
    let repository = std::sync::Arc::clone(db::get_repository()?);
    info!("Repository initialized successfully");

    let config = RepositoryConfig::load().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    if config.seed_catalog {
        let created = services::seed_default_catalog(repository.as_ref())
            .await
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        info!("Exercise catalog ready ({} entries seeded)", created);
    }

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
