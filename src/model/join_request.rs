use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    member::{ParentInfoDto, PlayerInfoDto},
    user::UserRole,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JoinRequestStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequestDto {
    pub id: String,
    pub team_id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub user_role: UserRole,
    pub status: JoinRequestStatus,
    pub requested_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJoinRequestDto {
    pub team_code: String,
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApproveJoinRequestDto {
    pub player_info: Option<PlayerInfoDto>,
    pub parent_info: Option<ParentInfoDto>,
}
