use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on the request.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token does not match any stored session.
    #[error("Unknown access token")]
    InvalidToken,

    /// The session behind the bearer token has passed its expiry.
    #[error("Session for user {0} has expired")]
    SessionExpired(String),

    /// The session refers to a user whose profile no longer exists.
    #[error("User {0} not found in store")]
    UserNotInStore(String),

    /// Email/password pair did not match a stored credential.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Signup with an email that already has a credential.
    #[error("A user with this email address has already been registered")]
    EmailTaken,

    /// Authenticated user lacks permission for the operation.
    ///
    /// # Fields
    /// - User id of the caller
    /// - Client-facing reason
    #[error("User {0} denied access: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `SessionExpired` / `UserNotInStore` → 401 Unauthorized
/// - `InvalidCredentials` / `EmailTaken` → 400 Bad Request
/// - `AccessDenied` → 403 Forbidden with the reason
///
/// Token failures are logged at debug level and answered with a generic message so the
/// client cannot tell an unknown token from an expired one.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken
            | Self::InvalidToken
            | Self::SessionExpired(_)
            | Self::UserNotInStore(_) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Unauthorized".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials | Self::EmailTaken => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("User {} denied access: {}", user_id, reason);
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: reason })).into_response()
            }
        }
    }
}
