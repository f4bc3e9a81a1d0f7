// src/main.rs

use anyhow::Context;
use std::sync::Arc;
use tracing::{error, info, warn};
use trivia_api::domain::model::STANDARD_CATEGORIES;
use trivia_api::infra::config::{ServerConfig, StoreBackend};
use trivia_api::infra::telemetry;
use trivia_api::transport;
use trivia_api::{MemoryTriviaStore, PostgresTriviaStore, QuizSelector, TriviaService, TriviaStore};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    if let Err(e) = telemetry::init_tracing() {
        eprintln!("[FATAL] {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> anyhow::Result<()> {
    info!("Starting trivia-api v{}", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, quiz selection={:?}",
        config.bind_address, config.selection_policy
    );

    // --- Store Initialization ---
    let store: Arc<dyn TriviaStore> = match &config.store {
        StoreBackend::Postgres {
            database_url,
            max_connections,
        } => {
            info!("Connecting to PostgreSQL (max_connections={})...", max_connections);
            let store = PostgresTriviaStore::connect(database_url, *max_connections)
                .await
                .context("Failed to initialize PostgreSQL store")?;
            info!("PostgreSQL store ready (tables ensured).");
            Arc::new(store)
        }
        StoreBackend::Memory => {
            warn!("TRIVIA_STORE=memory: data lives in this process only.");
            let store = MemoryTriviaStore::new();
            for kind in STANDARD_CATEGORIES {
                store
                    .insert_category(kind)
                    .await
                    .context("Failed to seed in-memory categories")?;
            }
            info!("In-memory store seeded with {} categories.", STANDARD_CATEGORIES.len());
            Arc::new(store)
        }
    };

    // --- Service Initialization ---
    let service = TriviaService::new(store, QuizSelector::new(config.selection_policy));
    let app_state = transport::http::AppState {
        service: Arc::new(service),
    };

    // --- API Server Initialization ---
    let app = transport::http::build_app(app_state);
    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_address))?;
    info!("API server listening on http://{}", config.bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Graceful shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received (Ctrl+C)...");
}
