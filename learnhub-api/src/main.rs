//! # LearnHub API Server
//!
//! This is the HTTP API server for LearnHub, a minimal learning platform:
//! user registration and login with bearer-token authentication, course
//! creation, and per-user enrollment and progress tracking.
//!
//! ## Architecture
//!
//! The server is built with Axum and provides:
//! - Authentication endpoints (register, login) issuing one-hour JWTs
//! - Token-gated course endpoints (create, enroll, track progress)
//! - PostgreSQL persistence with embedded migrations
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p learnhub-api
//! ```

use learnhub_api::{
    app::{build_router, AppState},
    config::Config,
};
use learnhub_shared::db::{migrations, pool};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "learnhub_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "LearnHub API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let db = pool::create_pool(pool::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;

    migrations::run_migrations(&db).await?;

    let bind_address = config.bind_address();
    let state = AppState::new(db, config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
