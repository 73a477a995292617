//! Seed data loading
//!
//! Guilds cannot be created through the emulated API, so they are read from
//! a JSON file at startup.

use std::path::Path;

use mockrest_core::{Guild, Store};
use tracing::info;

use crate::error::{AppError, AppResult};

/// Parse a JSON array of guilds
pub fn parse_guilds(raw: &str) -> Result<Vec<Guild>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Load a store from a seed file
pub fn load_store(path: &Path) -> AppResult<Store> {
    let raw = std::fs::read_to_string(path).map_err(|e| AppError::seed(path.display(), e))?;
    let guilds = parse_guilds(&raw).map_err(|e| AppError::seed(path.display(), e))?;
    let store = Store::with_guilds(guilds).map_err(|e| AppError::seed(path.display(), e))?;

    info!(path = %path.display(), guilds = store.guilds().len(), "Loaded seed data");

    Ok(store)
}
