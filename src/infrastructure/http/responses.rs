//! HTTP responses module
//!
//! This module contains HTTP response formatting and rejection recovery.

use crate::{
    infrastructure::http::models::{ApiMessage, ErrorBody},
    shared::error::AppError,
};
use serde::Serialize;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};
use warp::Rejection;

/// Response formatter for HTTP responses
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Format a successful JSON response
    pub fn success<T: Serialize>(value: &T) -> WithStatus<Json> {
        warp::reply::with_status(warp::reply::json(value), StatusCode::OK)
    }

    /// Format a message-only response
    pub fn message(text: &str) -> WithStatus<Json> {
        Self::success(&ApiMessage::new(text))
    }

    /// Format an application error with its mapped status code
    pub fn from_app_error(error: &AppError) -> WithStatus<Json> {
        warp::reply::with_status(
            warp::reply::json(&ErrorBody::new(error.to_string())),
            error.http_status_code(),
        )
    }
}

/// Convert warp rejections into the structured error body
pub async fn handle_rejection(err: Rejection) -> Result<WithStatus<Json>, Infallible> {
    let (status, detail) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else if let Some(app_error) = err.find::<AppError>() {
        (app_error.http_status_code(), app_error.to_string())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&ErrorBody::new(detail)),
        status,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use warp::Reply;

    #[test]
    fn test_success_response_is_ok() {
        let reply = ResponseFormatter::message("Shadi Broker API is running");
        let response = reply.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_not_found_error_maps_to_404() {
        let reply = ResponseFormatter::from_app_error(&AppError::NotFound);
        let response = reply.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_verification_error_maps_to_400() {
        let reply = ResponseFormatter::from_app_error(&AppError::PaymentVerification);
        let response = reply.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_creation_error_maps_to_500() {
        let reply =
            ResponseFormatter::from_app_error(&AppError::PaymentCreation("down".to_string()));
        let response = reply.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
