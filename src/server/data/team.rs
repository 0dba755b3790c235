//! Team repository.
//!
//! Besides the team record this owns the code lookup key `team:code:<code>` and the
//! per-user team index `user:<userId>:teams`.

use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{data::kv::KvRepository, model::team::Team};

fn team_key(id: &str) -> String {
    format!("team:{}", id)
}

fn code_key(code: &str) -> String {
    format!("team:code:{}", code)
}

fn user_teams_key(user_id: &str) -> String {
    format!("user:{}:teams", user_id)
}

pub struct TeamRepository<'a, C> {
    kv: KvRepository<'a, C>,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self {
            kv: KvRepository::new(db),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Option<Team>, DbErr> {
        self.kv.get(&team_key(id)).await
    }

    pub async fn save(&self, team: &Team) -> Result<(), DbErr> {
        self.kv.set(&team_key(&team.id), team).await
    }

    /// Whether a team already owns `code`.
    pub async fn code_exists(&self, code: &str) -> Result<bool, DbErr> {
        self.kv.exists(&code_key(code)).await
    }

    /// Points `team:code:<code>` at the team.
    pub async fn save_code(&self, code: &str, team_id: &str) -> Result<(), DbErr> {
        self.kv.set(&code_key(code), &team_id).await
    }

    /// Resolves a team code to its team.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - Code is registered and the team exists
    /// - `Ok(None)` - Unknown code or a dangling code key
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Team>, DbErr> {
        let Some(team_id) = self.kv.get::<String>(&code_key(code)).await? else {
            return Ok(None);
        };

        self.get(&team_id).await
    }

    /// Teams listed in the user's team index, skipping teams that no longer exist.
    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<Team>, DbErr> {
        self.kv.get_listed(&user_teams_key(user_id), team_key).await
    }

    /// Adds the team to the user's index if absent.
    pub async fn add_to_user(&self, user_id: &str, team_id: &str) -> Result<bool, DbErr> {
        self.kv.append_to_list(&user_teams_key(user_id), team_id).await
    }

    pub async fn remove_from_user(&self, user_id: &str, team_id: &str) -> Result<bool, DbErr> {
        self.kv
            .remove_from_list(&user_teams_key(user_id), team_id)
            .await
    }
}
