//! Request and response DTOs shared by the HTTP API.
//!
//! Everything here is serialized in camelCase to match the JSON the clients send and expect.

pub mod api;
pub mod attendance;
pub mod auth;
pub mod event;
pub mod join_request;
pub mod member;
pub mod message;
pub mod team;
pub mod user;
