//! Join request repository, including the `team:<teamId>:requests` index.

use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{data::kv::KvRepository, model::join_request::JoinRequest};

fn request_key(id: &str) -> String {
    format!("request:{}", id)
}

fn team_requests_key(team_id: &str) -> String {
    format!("team:{}:requests", team_id)
}

pub struct JoinRequestRepository<'a, C> {
    kv: KvRepository<'a, C>,
}

impl<'a, C: ConnectionTrait> JoinRequestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self {
            kv: KvRepository::new(db),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Option<JoinRequest>, DbErr> {
        self.kv.get(&request_key(id)).await
    }

    pub async fn save(&self, request: &JoinRequest) -> Result<(), DbErr> {
        self.kv.set(&request_key(&request.id), request).await
    }

    /// All requests of the team in submission order, whatever their status.
    pub async fn get_by_team(&self, team_id: &str) -> Result<Vec<JoinRequest>, DbErr> {
        self.kv
            .get_listed(&team_requests_key(team_id), request_key)
            .await
    }

    pub async fn add_to_team(&self, team_id: &str, request_id: &str) -> Result<bool, DbErr> {
        self.kv
            .append_to_list(&team_requests_key(team_id), request_id)
            .await
    }
}
