//! Instant Quizzer - a small quiz management backend
//!
//! CRUD over quizzes stored in MongoDB, plus appending participant results.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use instant_quizzer::api::create_router;
use instant_quizzer::store::{MongoQuizStore, QuizStore};
use instant_quizzer::{AppState, Config};

/// Main entry point for the quiz server.
///
/// # Startup Sequence
/// 1. Load `.env` (if present) and initialize tracing
/// 2. Load configuration from environment variables
/// 3. Connect to MongoDB and ping the deployment
/// 4. Create Axum router with all endpoints
/// 5. Serve until SIGINT/SIGTERM, then close the MongoDB client
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "instant_quizzer=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Instant Quizzer");

    let config = Config::from_env().context("failed to load configuration")?;
    info!(
        "Configuration loaded: database={}, collection={}, port={}, store_timeout={}s",
        config.database, config.collection, config.server_port, config.store_timeout
    );

    let store = MongoQuizStore::connect(&config)
        .await
        .context("failed to create MongoDB client")?;
    store
        .ping()
        .await
        .context("failed to ping MongoDB deployment")?;
    info!("Pinged MongoDB deployment, connection established");

    let app = create_router(AppState::new(store.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    store.shutdown().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
