//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum is the top-level error
//! type that wraps domain-specific errors and implements `IntoResponse`, so every handler
//! can return `Result<_, AppError>` and propagate with `?`. Every error body has the shape
//! `{"error": "<message>"}`.

pub mod auth;
pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `AuthError` handles its own response mapping, while generic
/// variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 400/401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Key-value store operation error from SeaORM.
    ///
    /// Also carries undecodable stored records. Results in 500 Internal Server Error
    /// with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Password hashing or verification failure.
    #[error(transparent)]
    BcryptErr(#[from] bcrypt::BcryptError),

    /// Binding the listener or serving connections failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body was missing, not JSON, or did not match the expected shape.
    ///
    /// Results in 400 Bad Request with axum's description of the problem.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Query string could not be parsed.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    /// Path segment could not be parsed.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and the extractor rejection variants
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, BcryptErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => bad_request(msg),
            Self::JsonRejection(rejection) => bad_request(rejection.body_text()),
            Self::QueryRejection(rejection) => bad_request(rejection.body_text()),
            Self::PathRejection(rejection) => bad_request(rejection.body_text()),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn bad_request(error: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorDto { error })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        let cases = [
            (AppError::NotFound("Team not found".into()), StatusCode::NOT_FOUND),
            (AppError::BadRequest("bad".into()), StatusCode::BAD_REQUEST),
            (
                AppError::InternalError("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::DbErr(sea_orm::DbErr::Custom("down".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AuthError::MissingToken.into(),
                StatusCode::UNAUTHORIZED,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
