//! Team membership domain model and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::{
        member::{
            MemberDto, MemberStatus, MemberWithUserDto, ParentInfoDto, PlayerInfoDto,
            UpdateMemberDto,
        },
        user::UserRole,
    },
    server::{error::AppError, model::user::User},
};

/// Membership stored under `member:<id>` and listed in `team:<teamId>:members`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub team_id: String,
    pub user_id: String,
    pub role: UserRole,
    pub status: MemberStatus,
    pub joined_at: Option<DateTime<Utc>>,
    /// Coach notes about the member.
    #[serde(default)]
    pub notes: String,
    pub player_info: Option<PlayerInfoDto>,
    pub parent_info: Option<ParentInfoDto>,
}

impl TeamMember {
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }

    pub fn is_active_coach(&self) -> bool {
        self.is_active() && self.role == UserRole::Coach
    }

    /// Whether this is a parent membership linked to `player_id`.
    pub fn is_parent_of(&self, player_id: &str) -> bool {
        self.role == UserRole::Parent
            && self
                .parent_info
                .as_ref()
                .is_some_and(|info| info.children_ids.iter().any(|id| id == player_id))
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            team_id: self.team_id,
            user_id: self.user_id,
            role: self.role,
            status: self.status,
            joined_at: self.joined_at,
            notes: self.notes,
            player_info: self.player_info,
            parent_info: self.parent_info,
        }
    }
}

/// Membership joined with the member's profile for roster listings.
#[derive(Debug, Clone)]
pub struct MemberWithUser {
    pub member: TeamMember,
    pub user: User,
}

impl MemberWithUser {
    pub fn into_dto(self) -> MemberWithUserDto {
        MemberWithUserDto {
            member: self.member.into_dto(),
            user: self.user.into_dto(),
        }
    }
}

/// Optional roster filters.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberFilter {
    pub role: Option<UserRole>,
    pub status: Option<MemberStatus>,
}

impl MemberFilter {
    pub fn matches(&self, member: &TeamMember) -> bool {
        self.role.is_none_or(|role| member.role == role)
            && self.status.is_none_or(|status| member.status == status)
    }
}

/// Fields a coach may change on a membership.
#[derive(Debug, Clone, Default)]
pub struct UpdateMemberParams {
    pub role: Option<UserRole>,
    pub status: Option<MemberStatus>,
    pub notes: Option<String>,
    pub player_info: Option<PlayerInfoDto>,
    pub parent_info: Option<ParentInfoDto>,
}

impl UpdateMemberParams {
    pub fn from_dto(dto: UpdateMemberDto) -> Result<Self, AppError> {
        if let Some(info) = &dto.player_info {
            validate_player_info(info)?;
        }

        Ok(Self {
            role: dto.role,
            status: dto.status,
            notes: dto.notes,
            player_info: dto.player_info,
            parent_info: dto.parent_info,
        })
    }

    pub fn apply(self, member: &mut TeamMember) {
        if let Some(role) = self.role {
            member.role = role;
        }
        if let Some(status) = self.status {
            member.status = status;
        }
        if let Some(notes) = self.notes {
            member.notes = notes;
        }
        if let Some(player_info) = self.player_info {
            member.player_info = Some(player_info);
        }
        if let Some(parent_info) = self.parent_info {
            member.parent_info = Some(parent_info);
        }
    }
}

/// Checks birth month range and jersey number bounds.
pub fn validate_player_info(info: &PlayerInfoDto) -> Result<(), AppError> {
    if info.birth_month.is_some_and(|m| !(1..=12).contains(&m)) {
        return Err(AppError::BadRequest(
            "birthMonth must be between 1 and 12".to_string(),
        ));
    }
    if info.jersey_number > 999 {
        return Err(AppError::BadRequest(
            "jerseyNumber must be between 0 and 999".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(role: UserRole, status: MemberStatus) -> TeamMember {
        TeamMember {
            id: "member_1".to_string(),
            team_id: "team_1".to_string(),
            user_id: "user_1".to_string(),
            role,
            status,
            joined_at: None,
            notes: String::new(),
            player_info: None,
            parent_info: None,
        }
    }

    #[test]
    fn active_coach_requires_both_role_and_status() {
        assert!(member(UserRole::Coach, MemberStatus::Active).is_active_coach());
        assert!(!member(UserRole::Coach, MemberStatus::Pending).is_active_coach());
        assert!(!member(UserRole::Player, MemberStatus::Active).is_active_coach());
    }

    #[test]
    fn parent_link_checks_children() {
        let mut parent = member(UserRole::Parent, MemberStatus::Active);
        assert!(!parent.is_parent_of("user_2"));

        parent.parent_info = Some(ParentInfoDto {
            children_ids: vec!["user_2".to_string()],
        });
        assert!(parent.is_parent_of("user_2"));
        assert!(!parent.is_parent_of("user_3"));
    }

    #[test]
    fn filter_matches_role_and_status() {
        let filter = MemberFilter {
            role: Some(UserRole::Player),
            status: Some(MemberStatus::Active),
        };
        assert!(filter.matches(&member(UserRole::Player, MemberStatus::Active)));
        assert!(!filter.matches(&member(UserRole::Parent, MemberStatus::Active)));
        assert!(!filter.matches(&member(UserRole::Player, MemberStatus::Rejected)));
        assert!(MemberFilter::default().matches(&member(UserRole::Coach, MemberStatus::Pending)));
    }

    #[test]
    fn rejects_out_of_range_birth_month() {
        let info = PlayerInfoDto {
            position: "Guard".to_string(),
            jersey_number: 23,
            birth_month: Some(13),
            birth_year: Some(2010),
            parent_id: None,
        };
        assert!(validate_player_info(&info).is_err());
    }
}
