//! Service layer for the team workflows.
//!
//! Services sit between the controllers and the repositories. They enforce the business
//! rules that go beyond a caller's permissions (duplicate requests, recipient rules, the
//! creator's protected membership), keep index lists in step with the records, and run
//! multi-key writes inside one store transaction. They take and return domain models,
//! never DTOs.

pub mod attendance;
pub mod auth;
pub mod event;
pub mod join_request;
pub mod member;
pub mod message;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
