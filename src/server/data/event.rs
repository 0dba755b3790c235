//! Event repository, including the `team:<teamId>:events` index.

use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{data::kv::KvRepository, model::event::Event};

fn event_key(id: &str) -> String {
    format!("event:{}", id)
}

fn team_events_key(team_id: &str) -> String {
    format!("team:{}:events", team_id)
}

pub struct EventRepository<'a, C> {
    kv: KvRepository<'a, C>,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self {
            kv: KvRepository::new(db),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Option<Event>, DbErr> {
        self.kv.get(&event_key(id)).await
    }

    pub async fn save(&self, event: &Event) -> Result<(), DbErr> {
        self.kv.set(&event_key(&event.id), event).await
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        self.kv.del(&event_key(id)).await
    }

    /// Events listed in the team index, unsorted.
    pub async fn get_by_team(&self, team_id: &str) -> Result<Vec<Event>, DbErr> {
        self.kv.get_listed(&team_events_key(team_id), event_key).await
    }

    pub async fn add_to_team(&self, team_id: &str, event_id: &str) -> Result<bool, DbErr> {
        self.kv
            .append_to_list(&team_events_key(team_id), event_id)
            .await
    }

    pub async fn remove_from_team(&self, team_id: &str, event_id: &str) -> Result<bool, DbErr> {
        self.kv
            .remove_from_list(&team_events_key(team_id), event_id)
            .await
    }
}
