//! Roster workflows: listing, editing and removing team members.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{member::MemberRepository, team::TeamRepository, user::UserRepository},
    error::AppError,
    model::member::{MemberFilter, MemberWithUser, TeamMember, UpdateMemberParams},
};

/// Lists the team on the user's index while they hold an active membership of it.
async fn sync_user_teams<C: ConnectionTrait>(
    db: &C,
    team_id: &str,
    user_id: &str,
) -> Result<(), DbErr> {
    let teams = TeamRepository::new(db);
    if MemberRepository::new(db)
        .find_active(team_id, user_id)
        .await?
        .is_some()
    {
        teams.add_to_user(user_id, team_id).await?;
    } else {
        teams.remove_from_user(user_id, team_id).await?;
    }

    Ok(())
}

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the team's members with their profiles.
    ///
    /// Members whose profile is missing are left out of the roster.
    ///
    /// # Arguments
    /// - `team_id` - Team to list
    /// - `filter` - Optional role and status filters
    ///
    /// # Returns
    /// - `Ok(Vec<MemberWithUser>)` - Matching members in index order
    pub async fn list(
        &self,
        team_id: &str,
        filter: MemberFilter,
    ) -> Result<Vec<MemberWithUser>, AppError> {
        let members: Vec<TeamMember> = MemberRepository::new(self.db)
            .get_by_team(team_id)
            .await?
            .into_iter()
            .filter(|m| filter.matches(m))
            .collect();

        let user_ids: Vec<String> = members.iter().map(|m| m.user_id.clone()).collect();
        let users = UserRepository::new(self.db).get_many(&user_ids).await?;

        Ok(members
            .into_iter()
            .filter_map(|member| match users.get(&member.user_id) {
                Some(user) => Some(MemberWithUser {
                    user: user.clone(),
                    member,
                }),
                None => {
                    tracing::warn!(
                        "Member {} refers to missing user {}",
                        member.id,
                        member.user_id
                    );
                    None
                }
            })
            .collect())
    }

    /// Loads a membership.
    ///
    /// # Returns
    /// - `Ok(TeamMember)` - Membership exists
    /// - `Err(AppError::NotFound)` - No membership with that id
    pub async fn get(&self, member_id: &str) -> Result<TeamMember, AppError> {
        MemberRepository::new(self.db)
            .get(member_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))
    }

    /// Applies the supplied fields to a membership.
    ///
    /// Keeps the user's team index in step with the status: the team stays listed while the
    /// user has any active membership of it.
    pub async fn update(
        &self,
        member_id: &str,
        params: UpdateMemberParams,
    ) -> Result<TeamMember, AppError> {
        let mut member = self.get(member_id).await?;
        params.apply(&mut member);

        let tx = self.db.begin().await?;
        let members = MemberRepository::new(&tx);
        members.save(&member).await?;
        sync_user_teams(&tx, &member.team_id, &member.user_id).await?;
        tx.commit().await?;

        Ok(member)
    }

    /// Removes a member from the team.
    ///
    /// Takes the membership out of the team index and deletes the record. The team leaves the
    /// user's index unless another active membership of it remains.
    ///
    /// # Returns
    /// - `Ok(())` - Member removed
    /// - `Err(AppError::NotFound)` - Membership or team missing
    /// - `Err(AppError::BadRequest)` - The membership belongs to the team creator
    pub async fn delete(&self, member_id: &str) -> Result<(), AppError> {
        let member = self.get(member_id).await?;
        let team = TeamRepository::new(self.db)
            .get(&member.team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;
        if member.user_id == team.created_by {
            return Err(AppError::BadRequest(
                "The team creator cannot be removed from the team".to_string(),
            ));
        }

        let tx = self.db.begin().await?;
        let members = MemberRepository::new(&tx);
        members.remove_from_team(&team.id, &member.id).await?;
        members.delete(&member.id).await?;
        sync_user_teams(&tx, &team.id, &member.user_id).await?;
        tx.commit().await?;

        tracing::info!("Removed member {} from team {}", member.id, team.id);

        Ok(())
    }
}
