//! User profile lookups and self-service edits.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{UpdateUserParams, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a profile.
    ///
    /// # Returns
    /// - `Ok(User)` - Profile exists
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get(&self, user_id: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Applies the supplied profile fields. Email, role and id stay as they are.
    pub async fn update(&self, user_id: &str, params: UpdateUserParams) -> Result<User, AppError> {
        let mut user = self.get(user_id).await?;
        params.apply(&mut user);
        UserRepository::new(self.db).save(&user).await?;

        Ok(user)
    }
}
