//! Attendance repository.
//!
//! Records live under `attendance:<id>`; the pair key `attendance:<eventId>:<playerId>` holds
//! the record id, which keeps one record per player and event and lets an event's records be
//! found with a prefix scan.

use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{data::kv::KvRepository, model::attendance::Attendance};

fn attendance_key(id: &str) -> String {
    format!("attendance:{}", id)
}

fn pair_key(event_id: &str, player_id: &str) -> String {
    format!("attendance:{}:{}", event_id, player_id)
}

fn event_prefix(event_id: &str) -> String {
    format!("attendance:{}:", event_id)
}

pub struct AttendanceRepository<'a, C> {
    kv: KvRepository<'a, C>,
}

impl<'a, C: ConnectionTrait> AttendanceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self {
            kv: KvRepository::new(db),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Option<Attendance>, DbErr> {
        self.kv.get(&attendance_key(id)).await
    }

    /// Stores the record and its (event, player) pair key.
    pub async fn save(&self, record: &Attendance) -> Result<(), DbErr> {
        self.kv.set(&attendance_key(&record.id), record).await?;
        self.kv
            .set(&pair_key(&record.event_id, &record.user_id), &record.id)
            .await
    }

    /// Finds the record for a player at an event.
    pub async fn find_by_event_and_player(
        &self,
        event_id: &str,
        player_id: &str,
    ) -> Result<Option<Attendance>, DbErr> {
        let Some(id) = self
            .kv
            .get::<String>(&pair_key(event_id, player_id))
            .await?
        else {
            return Ok(None);
        };

        self.get(&id).await
    }

    /// All records of an event, ordered by player id.
    pub async fn get_by_event(&self, event_id: &str) -> Result<Vec<Attendance>, DbErr> {
        let ids: Vec<String> = self
            .kv
            .get_by_prefix::<String>(&event_prefix(event_id))
            .await?
            .into_iter()
            .map(|(_, id)| attendance_key(&id))
            .collect();

        Ok(self.kv.mget(&ids).await?.into_iter().flatten().collect())
    }

    /// Deletes every record of an event together with the pair keys.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of attendance records removed
    pub async fn delete_by_event(&self, event_id: &str) -> Result<u64, DbErr> {
        let pairs = self
            .kv
            .get_by_prefix::<String>(&event_prefix(event_id))
            .await?;

        let mut removed = 0;
        for (pair, id) in pairs {
            if self.kv.del(&attendance_key(&id)).await? {
                removed += 1;
            }
            self.kv.del(&pair).await?;
        }

        Ok(removed)
    }
}
