//! Error types for the qappctl gateway

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The external command failed to spawn or exited non-zero
    #[error("err {action}: {reason}, {output}")]
    CommandFailed {
        action: String,
        reason: String,
        output: String,
    },

    /// The external command succeeded but its output did not decode
    #[error("err decoding output of {action}: {source}")]
    DecodeError {
        action: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    UnsupportedMediaType(String),

    #[error("{0}")]
    NotFound(String),

    /// Request body could not be read, reported with the extractor's status
    #[error("{message}")]
    BodyRejected { status: StatusCode, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Login error: {0}")]
    LoginError(String),

    #[error("Server error: {0}")]
    ServerError(String),
}

impl GatewayError {
    /// HTTP status the error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::BodyRejected { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("rejecting request: {}", self);
        }
        (status, format!("{}\n", self)).into_response()
    }
}
