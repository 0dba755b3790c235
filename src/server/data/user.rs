//! User profile repository.

use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{data::kv::KvRepository, model::user::User};

fn user_key(id: &str) -> String {
    format!("user:{}", id)
}

pub struct UserRepository<'a, C> {
    kv: KvRepository<'a, C>,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self {
            kv: KvRepository::new(db),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Option<User>, DbErr> {
        self.kv.get(&user_key(id)).await
    }

    /// Inserts or replaces the profile under `user:<id>`.
    pub async fn save(&self, user: &User) -> Result<(), DbErr> {
        self.kv.set(&user_key(&user.id), user).await
    }

    /// Loads several profiles keyed by id. Missing users are absent from the map.
    pub async fn get_many(
        &self,
        ids: &[String],
    ) -> Result<std::collections::HashMap<String, User>, DbErr> {
        let keys: Vec<String> = ids.iter().map(|id| user_key(id)).collect();

        Ok(self
            .kv
            .mget::<User>(&keys)
            .await?
            .into_iter()
            .flatten()
            .map(|user| (user.id.clone(), user))
            .collect())
    }
}
