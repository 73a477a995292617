//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use mockrest_common::{seed, AppConfig, AppError, AppResult};
use mockrest_core::{SharedStore, SnowflakeGenerator, Store};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let api = &state.config().api;
    let router = create_router(&api.prefix).merge(health_routes());
    let router = apply_middleware(router, api.request_timeout);
    router.with_state(state)
}

/// Load seed data and create AppState
///
/// # Errors
/// Returns an error if the configured seed file cannot be read or parsed
pub fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let store = match &config.seed.file {
        Some(path) => seed::load_store(path)?,
        None => {
            info!("No seed file configured, starting with an empty store");
            Store::new()
        }
    };

    let ids = SnowflakeGenerator::new(config.snowflake.worker_id);
    info!(worker_id = ids.worker_id(), "Id generator ready");
    let ids = Arc::new(ids);

    Ok(AppState::new(SharedStore::new(store), ids, config))
}

/// Run the HTTP server on an already bound listener
///
/// # Errors
/// Returns an error if the server stops abnormally
pub async fn serve(listener: TcpListener, app: Router) -> AppResult<()> {
    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(e.to_string()))
}

/// Run the HTTP server
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails
pub async fn run_server(app: Router, addr: SocketAddr) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr).await.map_err(|e| AppError::Bind {
        addr: addr.to_string(),
        reason: e.to_string(),
    })?;

    info!("Server listening on http://{}", addr);

    serve(listener, app).await
}

/// Run the complete server with configuration
///
/// # Errors
/// Returns an error if startup fails or the server stops abnormally
pub async fn run(config: AppConfig) -> AppResult<()> {
    let address = config.api.address();
    let addr: SocketAddr = address.parse().map_err(|e| AppError::Bind {
        addr: address.clone(),
        reason: format!("invalid socket address: {e}"),
    })?;

    // Create app state
    let state = create_app_state(config)?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
