//! Configuration structs

mod app_config;

pub use app_config::{
    normalize_prefix, AppConfig, AppSettings, ConfigError, Environment, SeedConfig,
    ServerConfig, SnowflakeConfig,
};
