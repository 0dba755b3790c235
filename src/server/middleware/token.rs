use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

use crate::server::error::{auth::AuthError, AppError};

/// Access token taken from an `Authorization: Bearer <token>` header.
///
/// Rejects the request with 401 when the header is absent or not a bearer credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl BearerToken {
    /// Parses the value of an `Authorization` header. The scheme is case-insensitive.
    pub fn parse(header: &str) -> Option<Self> {
        let (scheme, token) = header.trim().split_once(' ')?;
        let token = token.trim();
        if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
            return None;
        }

        Some(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(BearerToken::parse)
            .ok_or_else(|| AuthError::MissingToken.into())
    }
}
