//! Health check handler
//!
//! Liveness probe that also reports how much seed data is loaded.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub guilds: usize,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(guilds: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            guilds,
            timestamp: Utc::now(),
        }
    }
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let guilds = state.store().read(|store| store.guilds().len());
    Json(HealthResponse::healthy(guilds))
}
