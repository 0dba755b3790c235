//! Join request domain model and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::{
        join_request::{
            ApproveJoinRequestDto, CreateJoinRequestDto, JoinRequestDto, JoinRequestStatus,
        },
        member::{ParentInfoDto, PlayerInfoDto},
        user::UserRole,
    },
    server::{error::AppError, model::member::validate_player_info, util::id},
};

/// Request to join a team, stored under `request:<id>` and listed in `team:<teamId>:requests`.
///
/// The requester's name, email and role are captured when the request is made so coaches can
/// review it without loading the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
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

impl JoinRequest {
    pub fn is_pending(&self) -> bool {
        self.status == JoinRequestStatus::Pending
    }

    /// Marks the request reviewed with the given outcome.
    pub fn review(&mut self, status: JoinRequestStatus, reviewer_id: &str, now: DateTime<Utc>) {
        self.status = status;
        self.reviewed_at = Some(now);
        self.reviewed_by = Some(reviewer_id.to_string());
    }

    pub fn into_dto(self) -> JoinRequestDto {
        JoinRequestDto {
            id: self.id,
            team_id: self.team_id,
            user_id: self.user_id,
            user_name: self.user_name,
            user_email: self.user_email,
            user_role: self.user_role,
            status: self.status,
            requested_at: self.requested_at,
            reviewed_at: self.reviewed_at,
            reviewed_by: self.reviewed_by,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateJoinRequestParams {
    pub team_code: String,
    /// Requested role; falls back to the user's profile role.
    pub role: Option<UserRole>,
}

impl CreateJoinRequestParams {
    pub fn from_dto(dto: CreateJoinRequestDto) -> Result<Self, AppError> {
        let team_code = dto.team_code.trim().to_string();
        if !id::is_team_code(&team_code) {
            return Err(AppError::BadRequest(
                "teamCode must be an 8-digit code".to_string(),
            ));
        }

        Ok(Self {
            team_code,
            role: dto.role,
        })
    }
}

/// Optional role details attached to the membership created on approval.
#[derive(Debug, Clone, Default)]
pub struct ApproveJoinRequestParams {
    pub player_info: Option<PlayerInfoDto>,
    pub parent_info: Option<ParentInfoDto>,
}

impl ApproveJoinRequestParams {
    pub fn from_dto(dto: ApproveJoinRequestDto) -> Result<Self, AppError> {
        if let Some(info) = &dto.player_info {
            validate_player_info(info)?;
        }

        Ok(Self {
            player_info: dto.player_info,
            parent_info: dto.parent_info,
        })
    }
}
