//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. It centralizes error management, providing a consistent way to
//! represent the failure taxonomy: validation (400), authentication (401),
//! missing resources (404), and server-side failures (500).
//!
//! `AppError` implements `actix_web::error::ResponseError` to convert
//! application errors into JSON HTTP responses of the shape
//! `{"error": "<message>"}`. `From` impls for `sqlx::Error`,
//! `validator::ValidationErrors`, `jsonwebtoken::errors::Error`, and
//! `bcrypt::BcryptError` allow handlers to use the `?` operator freely.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// Authentication failure: bad credentials or a missing/invalid/expired
    /// token (HTTP 401).
    Unauthorized(String),
    /// Malformed or missing input, including duplicate-email registration and
    /// empty todo titles (HTTP 400).
    Validation(String),
    /// The requested resource does not exist, or is not owned by the
    /// authenticated user (HTTP 404).
    NotFound(String),
    /// Required server configuration is missing, e.g. the JWT signing secret
    /// (HTTP 500). Fatal to the request, not the process.
    Config(String),
    /// An unexpected store failure (HTTP 500). The underlying detail is
    /// logged, never returned to the client.
    Database(String),
    /// Any other unexpected server-side error (HTTP 500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration Error: {}", msg),
            AppError::Database(msg) => write!(f, "Database Error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into `HttpResponse` objects so that handlers
/// returning `Result<_, AppError>` produce the correct status code and a JSON
/// error body.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthorized(msg) => HttpResponse::Unauthorized().json(json!({
                "error": msg
            })),
            AppError::Validation(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            AppError::Config(msg) => HttpResponse::InternalServerError().json(json!({
                "error": msg
            })),
            // Store failures surface as a generic message; the detail stays in
            // the server log.
            AppError::Database(_) => HttpResponse::InternalServerError().json(json!({
                "error": "Database error"
            })),
            AppError::Internal(msg) => HttpResponse::InternalServerError().json(json!({
                "error": msg
            })),
        }
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `sqlx::Error::RowNotFound` maps to `AppError::NotFound`; everything else
/// becomes `AppError::Database`.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => {
                log::error!("database error: {}", error);
                AppError::Database(error.to_string())
            }
        }
    }
}

/// Converts `validator::ValidationErrors` into `AppError::Validation`,
/// preserving the per-field messages.
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::Validation(error.to_string())
    }
}

/// Converts `jsonwebtoken::errors::Error` into `AppError::Unauthorized`.
/// Used when token verification fails (bad signature, expiry, malformed).
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::Unauthorized(error.to_string())
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::Internal`.
/// Covers failures during password hashing or verification.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_responses() {
        let error = AppError::Unauthorized("Invalid token".into());
        let response = error.error_response();
        assert_eq!(response.status(), 401);

        let error = AppError::Validation("Title is required".into());
        let response = error.error_response();
        assert_eq!(response.status(), 400);

        let error = AppError::NotFound("Todo not found".into());
        let response = error.error_response();
        assert_eq!(response.status(), 404);

        let error = AppError::Config("JWT secret not configured".into());
        let response = error.error_response();
        assert_eq!(response.status(), 500);

        let error = AppError::Internal("Server error".into());
        let response = error.error_response();
        assert_eq!(response.status(), 500);
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let error: AppError = sqlx::Error::RowNotFound.into();
        match error {
            AppError::NotFound(_) => {}
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_database_error_body_is_generic() {
        let error = AppError::Database("connection reset by peer at 10.0.0.3".into());
        let response = error.error_response();
        assert_eq!(response.status(), 500);
        // The internal detail must not reach the response body.
        let body = actix_web::body::to_bytes(response.into_body());
        let body = futures::executor::block_on(body).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Database error");
    }
}
