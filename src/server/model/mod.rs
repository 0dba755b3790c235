//! Domain models stored in the key-value store, plus operation parameters.
//!
//! Records are serialized to JSON in camelCase and stored under their `<kind>:<id>` key.
//! Parameter types validate incoming DTOs once at the controller boundary, so services
//! work with already-checked values.

pub mod attendance;
pub mod auth;
pub mod event;
pub mod join_request;
pub mod member;
pub mod message;
pub mod stats;
pub mod team;
pub mod user;
