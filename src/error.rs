//! Error types and handling for the TourEase API

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Main error type for the TourEase service
#[derive(Error, Debug)]
pub enum TourEaseError {
    /// Unknown record id
    #[error("{message}")]
    NotFound { message: String },

    /// Third-party provider failed or timed out
    #[error("{message}")]
    UpstreamFailure { message: String },

    /// Backing data missing or corrupt and nothing to fall back to
    #[error("{message}")]
    DataUnavailable { message: String },

    /// Request parameter outside its accepted range
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Response cache errors
    #[error("Cache error: {message}")]
    Cache { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON encoding or decoding errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl TourEaseError {
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::UpstreamFailure {
            message: message.into(),
        }
    }

    pub fn data_unavailable<S: Into<String>>(message: S) -> Self {
        Self::DataUnavailable {
            message: message.into(),
        }
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// HTTP status this error maps to
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            TourEaseError::NotFound { .. } => StatusCode::NOT_FOUND,
            TourEaseError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            TourEaseError::UpstreamFailure { .. }
            | TourEaseError::DataUnavailable { .. }
            | TourEaseError::Config { .. }
            | TourEaseError::Cache { .. }
            | TourEaseError::Io { .. }
            | TourEaseError::Serialization { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TourEaseError::NotFound { message }
            | TourEaseError::UpstreamFailure { message }
            | TourEaseError::DataUnavailable { message } => message.clone(),
            TourEaseError::Validation { message } => format!("Invalid input: {message}"),
            TourEaseError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TourEaseError::Cache { .. } => "Cache operation failed.".to_string(),
            TourEaseError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TourEaseError::Serialization { .. } => "Failed to encode response data.".to_string(),
        }
    }
}

impl IntoResponse for TourEaseError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (status, Json(json!({ "detail": self.user_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = TourEaseError::not_found("Destination not found");
        assert!(matches!(err, TourEaseError::NotFound { .. }));

        let err = TourEaseError::upstream("connection refused");
        assert!(matches!(err, TourEaseError::UpstreamFailure { .. }));

        let err = TourEaseError::data_unavailable("Destination data not available");
        assert!(matches!(err, TourEaseError::DataUnavailable { .. }));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            TourEaseError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            TourEaseError::upstream("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            TourEaseError::data_unavailable("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            TourEaseError::validation("limit").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_user_messages() {
        let err = TourEaseError::not_found("Tour with ID tour-999 not found");
        assert_eq!(err.user_message(), "Tour with ID tour-999 not found");

        let err = TourEaseError::validation("limit must be between 1 and 20");
        assert!(err.user_message().contains("limit must be between 1 and 20"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TourEaseError = io_err.into();
        assert!(matches!(err, TourEaseError::Io { .. }));
    }
}
