//! Message repository, including the newest-first `team:<teamId>:messages` index.

use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{data::kv::KvRepository, model::message::Message};

fn message_key(id: &str) -> String {
    format!("message:{}", id)
}

fn team_messages_key(team_id: &str) -> String {
    format!("team:{}:messages", team_id)
}

pub struct MessageRepository<'a, C> {
    kv: KvRepository<'a, C>,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self {
            kv: KvRepository::new(db),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Option<Message>, DbErr> {
        self.kv.get(&message_key(id)).await
    }

    pub async fn save(&self, message: &Message) -> Result<(), DbErr> {
        self.kv.set(&message_key(&message.id), message).await
    }

    /// Messages of the team, newest first.
    pub async fn get_by_team(&self, team_id: &str) -> Result<Vec<Message>, DbErr> {
        self.kv
            .get_listed(&team_messages_key(team_id), message_key)
            .await
    }

    /// Puts the message at the front of the team index.
    pub async fn add_to_team(&self, team_id: &str, message_id: &str) -> Result<bool, DbErr> {
        self.kv
            .prepend_to_list(&team_messages_key(team_id), message_id)
            .await
    }
}
