//! Factories for seeding key-value records in tests.
//!
//! Each factory writes records in the same JSON layout and under the same keys the
//! service uses, including the auxiliary index lists, so service and repository code
//! can be exercised against seeded data without going through the HTTP layer.

pub mod event;
pub mod helpers;
pub mod member;
pub mod session;
pub mod team;
pub mod user;
