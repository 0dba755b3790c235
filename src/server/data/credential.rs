//! Login credential repository keyed by lowercased email.

use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{data::kv::KvRepository, model::auth::Credential};

fn credential_key(email: &str) -> String {
    format!("auth:email:{}", email.to_lowercase())
}

pub struct CredentialRepository<'a, C> {
    kv: KvRepository<'a, C>,
}

impl<'a, C: ConnectionTrait> CredentialRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self {
            kv: KvRepository::new(db),
        }
    }

    /// Finds the credential registered for `email`, compared case-insensitively.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Credential>, DbErr> {
        self.kv.get(&credential_key(email)).await
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        self.kv.exists(&credential_key(email)).await
    }

    pub async fn save(&self, credential: &Credential) -> Result<(), DbErr> {
        self.kv
            .set(&credential_key(&credential.email), credential)
            .await
    }
}
