//! Application error types
//!
//! Failures raised while bootstrapping and running the emulator process.

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load seed data from {path}: {reason}")]
    Seed { path: String, reason: String },

    #[error("Failed to bind to {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// Get error code for logs and diagnostics
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Seed { .. } => "SEED_ERROR",
            Self::Bind { .. } => "BIND_ERROR",
            Self::Server(_) => "SERVER_ERROR",
        }
    }

    /// Create a seed error for a file
    #[must_use]
    pub fn seed(path: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        Self::Seed {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
