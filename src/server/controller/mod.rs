//! HTTP handlers.
//!
//! Each handler authenticates the bearer token through `AuthGuard`, checks the caller's
//! permissions against the resource's team, converts DTOs to validated parameters, calls a
//! service and returns DTOs. Every handler carries a `utoipa::path` annotation for the
//! generated OpenAPI document.

pub mod attendance;
pub mod auth;
pub mod event;
pub mod health;
pub mod join_request;
pub mod member;
pub mod message;
pub mod param;
pub mod team;
pub mod user;
