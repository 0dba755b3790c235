use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Practice,
    Game,
    Meeting,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: String,
    pub team_id: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub title: String,
    pub date: NaiveDate,
    /// Start time as `HH:MM`.
    pub time: String,
    pub location: String,
    pub details: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub opponent: Option<String>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub is_home: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
    pub team_id: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub details: Option<String>,
    pub opponent: Option<String>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub is_home: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventDto {
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub details: Option<String>,
    pub opponent: Option<String>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub is_home: Option<bool>,
}
