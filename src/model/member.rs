use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::{UserDto, UserRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Pending,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfoDto {
    pub position: String,
    pub jersey_number: u32,
    pub birth_month: Option<u32>,
    pub birth_year: Option<i32>,
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParentInfoDto {
    #[serde(default)]
    pub children_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub id: String,
    pub team_id: String,
    pub user_id: String,
    pub role: UserRole,
    pub status: MemberStatus,
    pub joined_at: Option<DateTime<Utc>>,
    pub notes: String,
    pub player_info: Option<PlayerInfoDto>,
    pub parent_info: Option<ParentInfoDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberWithUserDto {
    #[serde(flatten)]
    pub member: MemberDto,
    pub user: UserDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberDto {
    pub role: Option<UserRole>,
    pub status: Option<MemberStatus>,
    pub notes: Option<String>,
    pub player_info: Option<PlayerInfoDto>,
    pub parent_info: Option<ParentInfoDto>,
}
