//! Session factory for authenticating seeded users.

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::json;

use crate::factory::helpers::{next_id, put_json};

/// Stores a session for `user_id` and returns its bearer token.
///
/// The session expires one day from now.
pub async fn create_session(db: &DatabaseConnection, user_id: &str) -> Result<String, DbErr> {
    create_session_expiring(db, user_id, Utc::now() + Duration::days(1)).await
}

/// Stores a session for `user_id` with an explicit expiry and returns its bearer token.
pub async fn create_session_expiring(
    db: &DatabaseConnection,
    user_id: &str,
    expires_at: chrono::DateTime<Utc>,
) -> Result<String, DbErr> {
    let token = format!("testtoken{:039}", next_id());
    let record = json!({
        "token": token,
        "userId": user_id,
        "createdAt": Utc::now().to_rfc3339(),
        "expiresAt": expires_at.to_rfc3339(),
    });
    put_json(db, &format!("session:{}", token), &record).await?;

    Ok(token)
}
