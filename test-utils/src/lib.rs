//! Team Hub Test Utils
//!
//! Provides shared testing utilities for building unit and integration tests for the team hub
//! service. This crate offers a builder for creating test contexts backed by an in-memory
//! SQLite key-value store, plus factories that seed user, team, membership, event and session
//! records in the same JSON layout the service writes.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Record seeding helpers
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn seeds_a_team() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_kv_store().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let coach = factory::user::create_user(db).await?;
//!     let team = factory::team::create_team(db, &coach.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
