//! Response types and error handling for API endpoints
//!
//! Every failed request is translated exactly once, by `ApiError`'s
//! `IntoResponse` impl. Successful requests answer 200 with either an
//! encoded JSON body or an empty body.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use mockrest_core::StoreError;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Invalid request body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode response body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to read request body: {0}")]
    Io(String),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Store(
                StoreError::GuildNotFound(_)
                | StoreError::RoleNotFound { .. }
                | StoreError::MemberNotFound { .. },
            ) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::InvalidGuild { .. }) | Self::Encode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Decode(_) | Self::Io(_) | Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Store(e) => e.code(),
            Self::Decode(_) => "DECODE_ERROR",
            Self::Encode(_) => "ENCODE_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
        }
    }

    /// Create an invalid path parameter error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail for API responses
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        } else {
            debug!(status = %status, error = %self, "Request rejected");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Successful response carrying an already encoded JSON body
#[derive(Debug)]
pub struct ApiJson(Vec<u8>);

impl ApiJson {
    /// Encode a value, surfacing serializer failures as `ApiError::Encode`
    pub fn encode<T: Serialize + ?Sized>(value: &T) -> ApiResult<Self> {
        serde_json::to_vec(value).map(Self).map_err(ApiError::Encode)
    }
}

impl IntoResponse for ApiJson {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            self.0,
        )
            .into_response()
    }
}

/// Successful response with an empty body
#[derive(Debug)]
pub struct Empty;

impl IntoResponse for Empty {
    fn into_response(self) -> Response {
        StatusCode::OK.into_response()
    }
}
