//! Credential and session records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Login credential stored under `auth:email:<email>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub user_id: String,
    pub email: String,
    /// bcrypt hash of the password.
    pub password_hash: String,
}

/// Access-token session stored under `session:<token>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
