use axum::http::{header::AUTHORIZATION, Request};
use axum::extract::FromRequestParts;

use crate::server::{error::AppError, middleware::token::BearerToken};

#[test]
fn parses_bearer_scheme_case_insensitively() {
    assert_eq!(
        BearerToken::parse("Bearer abc123"),
        Some(BearerToken("abc123".to_string()))
    );
    assert_eq!(
        BearerToken::parse("bearer   abc123 "),
        Some(BearerToken("abc123".to_string()))
    );
}

#[test]
fn rejects_other_schemes_and_empty_tokens() {
    assert_eq!(BearerToken::parse("Basic dXNlcjpwYXNz"), None);
    assert_eq!(BearerToken::parse("Bearer "), None);
    assert_eq!(BearerToken::parse("abc123"), None);
}

/// Tests the extractor rejects requests without an Authorization header.
///
/// Expected: Err(AppError::AuthErr)
#[tokio::test]
async fn extractor_requires_header() {
    let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();
    let result = BearerToken::from_request_parts(&mut parts, &()).await;
    assert!(matches!(result, Err(AppError::AuthErr(_))));

    let (mut parts, _) = Request::builder()
        .header(AUTHORIZATION, "Bearer token-value")
        .body(())
        .unwrap()
        .into_parts();
    let token = BearerToken::from_request_parts(&mut parts, &()).await.unwrap();
    assert_eq!(token.as_str(), "token-value");
}
