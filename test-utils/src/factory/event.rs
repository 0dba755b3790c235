//! Event factory.

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::{json, Value};

use crate::factory::helpers::{next_id, now, push_index, put_json};

/// Factory for creating team events.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: String,
    created_by: String,
    event_type: String,
    title: String,
    date: String,
    time: String,
    is_home: Value,
    home_score: Value,
    away_score: Value,
}

impl<'a> EventFactory<'a> {
    /// Defaults: a practice titled `"Event {n}"` one week from today at 16:00.
    pub fn new(
        db: &'a DatabaseConnection,
        team_id: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        let n = next_id();
        Self {
            db,
            team_id: team_id.into(),
            created_by: created_by.into(),
            event_type: "practice".to_string(),
            title: format!("Event {}", n),
            date: days_from_today(7),
            time: "16:00".to_string(),
            is_home: Value::Null,
            home_score: Value::Null,
            away_score: Value::Null,
        }
    }

    /// Sets the event type: `"practice"`, `"game"`, `"meeting"` or `"other"`.
    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the date as an offset in days from today; negative offsets are in the past.
    pub fn days_from_today(mut self, days: i64) -> Self {
        self.date = days_from_today(days);
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Makes the event a game with a recorded score.
    pub fn game_result(mut self, is_home: bool, home_score: u32, away_score: u32) -> Self {
        self.event_type = "game".to_string();
        self.is_home = json!(is_home);
        self.home_score = json!(home_score);
        self.away_score = json!(away_score);
        self
    }

    /// Builds and stores the event, returning its id.
    pub async fn build(self) -> Result<String, DbErr> {
        let id = format!("event_{}", next_id());
        let record = json!({
            "id": id,
            "teamId": self.team_id,
            "type": self.event_type,
            "title": self.title,
            "date": self.date,
            "time": self.time,
            "location": "Main Gym",
            "details": null,
            "createdBy": self.created_by,
            "createdAt": now(),
            "opponent": null,
            "homeScore": self.home_score,
            "awayScore": self.away_score,
            "isHome": self.is_home,
        });
        put_json(self.db, &format!("event:{}", id), &record).await?;
        push_index(self.db, &format!("team:{}:events", self.team_id), &id).await?;

        Ok(id)
    }
}

fn days_from_today(days: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}
