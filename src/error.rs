// src/error.rs
//! Error types for the recipe store

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors surfaced by the recipe store and its HTTP layer
#[derive(Error, Debug)]
pub enum Error {
    /// Request body did not decode into a recipe
    #[error("{0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for recipe store operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            Error::MalformedInput(_) => StatusCode::BAD_REQUEST,
            Error::Io(_) | Error::Config(_) | Error::InvalidConfig(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_input_is_bad_request() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = Error::from(err);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_io_is_internal_error() {
        let err = Error::from(std::io::Error::other("disk gone"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("disk gone"));
    }
}
