//! Access-token session repository.

use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{data::kv::KvRepository, model::auth::Session};

fn session_key(token: &str) -> String {
    format!("session:{}", token)
}

pub struct SessionRepository<'a, C> {
    kv: KvRepository<'a, C>,
}

impl<'a, C: ConnectionTrait> SessionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self {
            kv: KvRepository::new(db),
        }
    }

    pub async fn get(&self, token: &str) -> Result<Option<Session>, DbErr> {
        self.kv.get(&session_key(token)).await
    }

    pub async fn save(&self, session: &Session) -> Result<(), DbErr> {
        self.kv.set(&session_key(&session.token), session).await
    }

    /// Deletes the session for `token`.
    ///
    /// # Returns
    /// - `Ok(true)` - Session existed and was removed
    /// - `Ok(false)` - No session for the token
    pub async fn delete(&self, token: &str) -> Result<bool, DbErr> {
        self.kv.del(&session_key(token)).await
    }
}
