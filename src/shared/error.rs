//! Error handling module
//!
//! This module provides centralized error handling for the application.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON serialization error: {0}")]
    Json(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Profile not found")]
    NotFound,

    #[error("Payment creation failed: {0}")]
    PaymentCreation(String),

    // Deliberately carries no detail: the gateway's guidance is to never
    // surface why a signature check failed.
    #[error("Payment verification failed")]
    PaymentVerification,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code for this error
    pub fn http_status_code(&self) -> warp::http::StatusCode {
        match self {
            AppError::NotFound => warp::http::StatusCode::NOT_FOUND,
            AppError::PaymentVerification => warp::http::StatusCode::BAD_REQUEST,
            AppError::Validation(_) => warp::http::StatusCode::BAD_REQUEST,
            AppError::Json(_) => warp::http::StatusCode::BAD_REQUEST,
            AppError::PaymentCreation(_) => warp::http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => warp::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

// Implement warp::reject::Reject for AppError
impl warp::reject::Reject for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::Storage(err.to_string())
    }
}
