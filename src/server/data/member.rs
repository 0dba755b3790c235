//! Team membership repository, including the `team:<teamId>:members` index.

use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{data::kv::KvRepository, model::member::TeamMember};

fn member_key(id: &str) -> String {
    format!("member:{}", id)
}

fn team_members_key(team_id: &str) -> String {
    format!("team:{}:members", team_id)
}

pub struct MemberRepository<'a, C> {
    kv: KvRepository<'a, C>,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self {
            kv: KvRepository::new(db),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Option<TeamMember>, DbErr> {
        self.kv.get(&member_key(id)).await
    }

    pub async fn save(&self, member: &TeamMember) -> Result<(), DbErr> {
        self.kv.set(&member_key(&member.id), member).await
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        self.kv.del(&member_key(id)).await
    }

    /// Members listed in the team index, in index order. Dangling ids are skipped.
    pub async fn get_by_team(&self, team_id: &str) -> Result<Vec<TeamMember>, DbErr> {
        self.kv
            .get_listed(&team_members_key(team_id), member_key)
            .await
    }

    /// Finds the user's active membership of the team.
    ///
    /// # Returns
    /// - `Ok(Some(TeamMember))` - User is an active member
    /// - `Ok(None)` - No membership, or only pending/rejected ones
    pub async fn find_active(
        &self,
        team_id: &str,
        user_id: &str,
    ) -> Result<Option<TeamMember>, DbErr> {
        Ok(self
            .get_by_team(team_id)
            .await?
            .into_iter()
            .find(|m| m.user_id == user_id && m.is_active()))
    }

    /// Finds any membership of the user in the team, preferring an active one.
    pub async fn find_by_user(
        &self,
        team_id: &str,
        user_id: &str,
    ) -> Result<Option<TeamMember>, DbErr> {
        let mut memberships: Vec<TeamMember> = self
            .get_by_team(team_id)
            .await?
            .into_iter()
            .filter(|m| m.user_id == user_id)
            .collect();
        if memberships.is_empty() {
            return Ok(None);
        }
        let index = memberships.iter().position(TeamMember::is_active).unwrap_or(0);

        Ok(Some(memberships.swap_remove(index)))
    }

    pub async fn add_to_team(&self, team_id: &str, member_id: &str) -> Result<bool, DbErr> {
        self.kv
            .append_to_list(&team_members_key(team_id), member_id)
            .await
    }

    pub async fn remove_from_team(&self, team_id: &str, member_id: &str) -> Result<bool, DbErr> {
        self.kv
            .remove_from_list(&team_members_key(team_id), member_id)
            .await
    }
}
