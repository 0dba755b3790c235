//! Account and session workflows: signup, signin and signout.

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{credential::CredentialRepository, session::SessionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        auth::{Credential, Session},
        user::{SignupParams, User},
    },
    util::id,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Hashes the password on the blocking pool, then writes the profile and the credential
    /// in one transaction so an account never exists with only one of the two.
    ///
    /// # Arguments
    /// - `params` - Validated signup fields
    /// - `bcrypt_cost` - Work factor for the password hash
    ///
    /// # Returns
    /// - `Ok(User)` - Newly created profile
    /// - `Err(AppError::AuthErr(EmailTaken))` - Email already registered
    /// - `Err(AppError::DbErr)` - Store error
    pub async fn signup(&self, params: SignupParams, bcrypt_cost: u32) -> Result<User, AppError> {
        if CredentialRepository::new(self.db)
            .email_exists(&params.email)
            .await?
        {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = hash_password(params.password, bcrypt_cost).await?;
        let user = User {
            id: id::new_id("user"),
            email: params.email,
            role: params.role,
            first_name: params.first_name,
            last_name: params.last_name,
            nickname: params.nickname,
            phone: params.phone,
            photo_url: String::new(),
            created_at: Utc::now(),
        };

        let tx = self.db.begin().await?;
        let credentials = CredentialRepository::new(&tx);
        // Re-checked inside the transaction; hashing above leaves a window for a racing signup.
        if credentials.email_exists(&user.email).await? {
            return Err(AuthError::EmailTaken.into());
        }
        UserRepository::new(&tx).save(&user).await?;
        credentials
            .save(&Credential {
                user_id: user.id.clone(),
                email: user.email.clone(),
                password_hash,
            })
            .await?;
        tx.commit().await?;

        tracing::info!("Registered user {} as {:?}", user.id, user.role);

        Ok(user)
    }

    /// Verifies an email/password pair and opens a session.
    ///
    /// # Arguments
    /// - `email` - Email as typed; compared case-insensitively
    /// - `password` - Plain-text password
    /// - `session_ttl` - Lifetime of the new session
    ///
    /// # Returns
    /// - `Ok((Session, User))` - New session and the signed-in profile
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    pub async fn signin(
        &self,
        email: &str,
        password: &str,
        session_ttl: Duration,
    ) -> Result<(Session, User), AppError> {
        let Some(credential) = CredentialRepository::new(self.db)
            .find_by_email(email.trim())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password.to_string(), credential.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let Some(user) = UserRepository::new(self.db)
            .get(&credential.user_id)
            .await?
        else {
            tracing::warn!(
                "Credential for {} points at missing user {}",
                credential.email,
                credential.user_id
            );
            return Err(AuthError::InvalidCredentials.into());
        };

        let now = Utc::now();
        let session = Session {
            token: id::generate_access_token(),
            user_id: user.id.clone(),
            created_at: now,
            expires_at: now + session_ttl,
        };
        SessionRepository::new(self.db).save(&session).await?;

        Ok((session, user))
    }

    /// Ends the session behind `token`. Unknown tokens are ignored.
    pub async fn signout(&self, token: &str) -> Result<(), AppError> {
        SessionRepository::new(self.db).delete(token).await?;
        Ok(())
    }
}

async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
        .map_err(AppError::from)
}

async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::InternalError(format!("Password verification task failed: {}", e)))?
        .map_err(AppError::from)
}
