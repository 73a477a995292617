//! # mockrest-common
//!
//! Shared utilities including configuration, error handling, seed loading, and telemetry.

pub mod config;
pub mod error;
pub mod seed;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    normalize_prefix, AppConfig, AppSettings, ConfigError, Environment, SeedConfig, ServerConfig,
    SnowflakeConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
