//! User factory for creating test user profiles.
//!
//! Writes `user:<id>` profile records. No credential is stored, so seeded users
//! authenticate through a session from `factory::session` rather than by signing in.

use sea_orm::{DatabaseConnection, DbErr};
use serde_json::json;

use crate::factory::helpers::{next_id, now, put_json};

/// Identity of a seeded user.
#[derive(Debug, Clone)]
pub struct SeededUser {
    pub id: String,
    pub email: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
}

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let coach = UserFactory::new(&db).role("coach").first_name("Pat").build().await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    email: String,
    role: String,
    first_name: String,
    last_name: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id: `"user_{n}"` where n is auto-incremented
    /// - email: `"user{n}@example.com"`
    /// - role: `"player"`
    /// - name: `"User"` / `"{n}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: format!("user_{}", n),
            email: format!("user{}@example.com", n),
            role: "player".to_string(),
            first_name: "User".to_string(),
            last_name: n.to_string(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the profile role: `"coach"`, `"player"` or `"parent"`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Builds and stores the user profile.
    ///
    /// # Returns
    /// - `Ok(SeededUser)` - Identity of the stored user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<SeededUser, DbErr> {
        let record = json!({
            "id": self.id,
            "email": self.email,
            "role": self.role,
            "firstName": self.first_name,
            "lastName": self.last_name,
            "nickname": "",
            "phone": "",
            "photoUrl": "",
            "createdAt": now(),
        });
        put_json(self.db, &format!("user:{}", self.id), &record).await?;

        Ok(SeededUser {
            id: self.id,
            email: self.email,
            role: self.role,
            first_name: self.first_name,
            last_name: self.last_name,
        })
    }
}

/// Creates a player profile with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<SeededUser, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user profile with the given role.
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role: &str,
) -> Result<SeededUser, DbErr> {
    UserFactory::new(db).role(role).build().await
}
