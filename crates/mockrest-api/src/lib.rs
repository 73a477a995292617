//! # mockrest-api
//!
//! REST emulator for guild roles and members, built with Axum.
//!
//! Embed it in tests by building an [`AppState`] over a pre-filled store and
//! serving [`create_app`]:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use mockrest_api::{create_app, AppState};
//! use mockrest_common::AppConfig;
//! use mockrest_core::{Guild, SharedStore, SnowflakeGenerator, Store};
//!
//! # fn main() -> Result<(), mockrest_core::StoreError> {
//! let store = SharedStore::new(Store::with_guilds([Guild::new("g1")])?);
//! let state = AppState::new(store, Arc::new(SnowflakeGenerator::default()), AppConfig::default());
//! let app = create_app(state);
//! # drop(app);
//! # Ok(())
//! # }
//! ```

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, serve};
pub use state::AppState;
