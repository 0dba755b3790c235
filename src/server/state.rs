//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through
//! Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and settings.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// rest are plain values.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the key-value store.
    pub db: DatabaseConnection,

    /// Lifetime of sessions created at sign-in.
    pub session_ttl: chrono::Duration,

    /// bcrypt work factor used when hashing new passwords.
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `session_ttl` - Access token lifetime
    /// - `bcrypt_cost` - Password hashing cost
    pub fn new(db: DatabaseConnection, session_ttl: chrono::Duration, bcrypt_cost: u32) -> Self {
        Self {
            db,
            session_ttl,
            bcrypt_cost,
        }
    }
}
