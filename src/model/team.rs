use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: String,
    pub name: String,
    /// 8-digit code other users join the team with.
    pub code: String,
    pub logo_url: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamDto {
    pub name: String,
    pub logo_url: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamDto {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatsDto {
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    /// Percentage of games won, one decimal place.
    pub win_rate: f64,
    pub total_players: u32,
    pub active_players: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsDto {
    pub player_id: String,
    pub games_played: u32,
    pub events_recorded: u32,
    /// Percentage of recorded events attended, one decimal place.
    pub attendance_rate: f64,
}
