//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub seed: SeedConfig,
    pub snowflake: SnowflakeConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            env: Environment::default(),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(ConfigError::InvalidValue("APP_ENV", other.to_string())),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Path prefix the emulated API is mounted under, e.g. `/api/v10`
    pub prefix: String,
    pub request_timeout: Duration,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            prefix: default_prefix(),
            request_timeout: Duration::from_secs(default_request_timeout_secs()),
        }
    }
}

/// Initial store contents
#[derive(Debug, Clone, Default)]
pub struct SeedConfig {
    /// JSON file holding an array of guilds
    pub file: Option<PathBuf>,
}

/// Snowflake ID generator configuration
#[derive(Debug, Clone, Default)]
pub struct SnowflakeConfig {
    pub worker_id: u16,
}

// Default value functions
fn default_app_name() -> String {
    "mockrest".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_prefix() -> String {
    "/api/v10".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Normalize a mount prefix to a leading slash and no trailing slash
///
/// The root prefix normalizes to an empty string.
#[must_use]
pub fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Parse an optional environment variable, failing on unparsable values
fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(None),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Every variable is optional; unset ones fall back to defaults.
    ///
    /// # Errors
    /// Returns an error if a variable is set to a value that cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let worker_id = parse_var::<u16>("WORKER_ID")?.unwrap_or(0);
        if worker_id >= 1024 {
            return Err(ConfigError::InvalidValue("WORKER_ID", worker_id.to_string()));
        }

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: parse_var("APP_ENV")?.unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: parse_var("API_PORT")?.unwrap_or_else(default_port),
                prefix: normalize_prefix(
                    &env::var("API_PREFIX").unwrap_or_else(|_| default_prefix()),
                ),
                request_timeout: Duration::from_secs(
                    parse_var("REQUEST_TIMEOUT_SECS")?
                        .unwrap_or_else(default_request_timeout_secs),
                ),
            },
            seed: SeedConfig {
                file: env::var_os("SEED_FILE")
                    .filter(|s| !s.is_empty())
                    .map(PathBuf::from),
            },
            snowflake: SnowflakeConfig { worker_id },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
