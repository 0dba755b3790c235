//! Join request workflows: asking to join by team code and coach review.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{join_request::JoinRequestStatus, member::MemberStatus},
    server::{
        data::{
            join_request::JoinRequestRepository, member::MemberRepository, team::TeamRepository,
        },
        error::AppError,
        model::{
            join_request::{ApproveJoinRequestParams, CreateJoinRequestParams, JoinRequest},
            member::TeamMember,
            user::User,
        },
        util::id,
    },
};

pub struct JoinRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JoinRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a request by `user` to join the team owning the code.
    ///
    /// # Arguments
    /// - `user` - Authenticated requester; name, email and role are copied onto the request
    /// - `params` - Team code and optional role, defaulting to the profile role
    ///
    /// # Returns
    /// - `Ok(JoinRequest)` - Pending request
    /// - `Err(AppError::NotFound)` - No team owns the code
    /// - `Err(AppError::BadRequest)` - Already an active member, or a request is pending
    pub async fn create(
        &self,
        user: &User,
        params: CreateJoinRequestParams,
    ) -> Result<JoinRequest, AppError> {
        let tx = self.db.begin().await?;
        let Some(team) = TeamRepository::new(&tx)
            .find_by_code(&params.team_code)
            .await?
        else {
            return Err(AppError::NotFound("Invalid team code".to_string()));
        };

        if MemberRepository::new(&tx)
            .find_active(&team.id, &user.id)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(
                "You are already a member of this team".to_string(),
            ));
        }

        let requests = JoinRequestRepository::new(&tx);
        let already_pending = requests
            .get_by_team(&team.id)
            .await?
            .iter()
            .any(|r| r.user_id == user.id && r.is_pending());
        if already_pending {
            return Err(AppError::BadRequest(
                "You already have a pending request for this team".to_string(),
            ));
        }

        let request = JoinRequest {
            id: id::new_id("request"),
            team_id: team.id.clone(),
            user_id: user.id.clone(),
            user_name: user.full_name(),
            user_email: user.email.clone(),
            user_role: params.role.unwrap_or(user.role),
            status: JoinRequestStatus::Pending,
            requested_at: Utc::now(),
            reviewed_at: None,
            reviewed_by: None,
        };
        requests.save(&request).await?;
        requests.add_to_team(&team.id, &request.id).await?;
        tx.commit().await?;

        tracing::info!("User {} requested to join team {}", user.id, team.id);

        Ok(request)
    }

    /// Loads a join request.
    ///
    /// # Returns
    /// - `Ok(JoinRequest)` - Request exists
    /// - `Err(AppError::NotFound)` - No request with that id
    pub async fn get(&self, request_id: &str) -> Result<JoinRequest, AppError> {
        JoinRequestRepository::new(self.db)
            .get(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Join request not found".to_string()))
    }

    /// Pending requests of a team, oldest first.
    pub async fn list_pending(&self, team_id: &str) -> Result<Vec<JoinRequest>, AppError> {
        Ok(JoinRequestRepository::new(self.db)
            .get_by_team(team_id)
            .await?
            .into_iter()
            .filter(JoinRequest::is_pending)
            .collect())
    }

    /// Approves a pending request and activates the membership.
    ///
    /// A user with an earlier pending or rejected membership of the team gets that record
    /// reactivated; otherwise a new one is created. The request is re-read inside the
    /// transaction, so two concurrent approvals cannot both create a membership.
    ///
    /// # Arguments
    /// - `request_id` - Request to approve
    /// - `reviewer` - Coach approving the request
    /// - `params` - Optional player or parent details for the new membership
    ///
    /// # Returns
    /// - `Ok(TeamMember)` - The active membership
    /// - `Err(AppError::NotFound)` - Request missing
    /// - `Err(AppError::BadRequest)` - Request already reviewed, or the user is already an
    ///   active member
    pub async fn approve(
        &self,
        request_id: &str,
        reviewer: &User,
        params: ApproveJoinRequestParams,
    ) -> Result<TeamMember, AppError> {
        let tx = self.db.begin().await?;
        let requests = JoinRequestRepository::new(&tx);
        let members = MemberRepository::new(&tx);

        let mut request = requests
            .get(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Join request not found".to_string()))?;
        if !request.is_pending() {
            return Err(AppError::BadRequest(
                "Join request has already been reviewed".to_string(),
            ));
        }
        if members
            .find_active(&request.team_id, &request.user_id)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(
                "User is already a member of this team".to_string(),
            ));
        }

        let now = Utc::now();
        request.review(JoinRequestStatus::Approved, &reviewer.id, now);
        // A returning user gets their earlier membership back rather than a second record.
        let member = match members
            .find_by_user(&request.team_id, &request.user_id)
            .await?
        {
            Some(mut previous) => {
                previous.role = request.user_role;
                previous.status = MemberStatus::Active;
                previous.joined_at = Some(now);
                if params.player_info.is_some() {
                    previous.player_info = params.player_info;
                }
                if params.parent_info.is_some() {
                    previous.parent_info = params.parent_info;
                }
                previous
            }
            None => TeamMember {
                id: id::new_id("member"),
                team_id: request.team_id.clone(),
                user_id: request.user_id.clone(),
                role: request.user_role,
                status: MemberStatus::Active,
                joined_at: Some(now),
                notes: String::new(),
                player_info: params.player_info,
                parent_info: params.parent_info,
            },
        };

        requests.save(&request).await?;
        members.save(&member).await?;
        members.add_to_team(&member.team_id, &member.id).await?;
        TeamRepository::new(&tx)
            .add_to_user(&member.user_id, &member.team_id)
            .await?;
        tx.commit().await?;

        tracing::info!(
            "Coach {} approved request {} into team {}",
            reviewer.id,
            request.id,
            request.team_id
        );

        Ok(member)
    }

    /// Rejects a pending request.
    ///
    /// Runs in a transaction so it cannot overwrite a concurrent approval.
    ///
    /// # Returns
    /// - `Ok(JoinRequest)` - The rejected request
    /// - `Err(AppError::BadRequest)` - Request already reviewed
    pub async fn reject(&self, request_id: &str, reviewer: &User) -> Result<JoinRequest, AppError> {
        let tx = self.db.begin().await?;
        let requests = JoinRequestRepository::new(&tx);

        let mut request = requests
            .get(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Join request not found".to_string()))?;
        if !request.is_pending() {
            return Err(AppError::BadRequest(
                "Join request has already been reviewed".to_string(),
            ));
        }

        request.review(JoinRequestStatus::Rejected, &reviewer.id, Utc::now());
        requests.save(&request).await?;
        tx.commit().await?;

        Ok(request)
    }
}
