use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        member::MemberRepository, session::SessionRepository, team::TeamRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    middleware::token::BearerToken,
    model::{member::TeamMember, team::Team, user::User},
};

/// Access rules a handler can demand of the caller.
#[derive(Debug, Clone, Copy)]
pub enum Permission<'a> {
    /// Active member of the team, any role.
    TeamMember(&'a str),
    /// Active coach of the team.
    TeamCoach(&'a str),
    /// The user who created the team.
    TeamCreator(&'a str),
    /// The caller is this user.
    User(&'a str),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    token: &'a BearerToken,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, token: &'a BearerToken) -> Self {
        Self { db, token }
    }

    /// Resolves the bearer token to the signed-in user.
    ///
    /// Expired sessions are deleted on the way.
    ///
    /// # Returns
    /// - `Ok(User)` - Valid session for an existing user
    /// - `Err(AuthError::InvalidToken)` - No session for the token
    /// - `Err(AuthError::SessionExpired)` - Session past its expiry
    /// - `Err(AuthError::UserNotInStore)` - Session refers to a deleted user
    pub async fn authenticate(&self) -> Result<User, AppError> {
        let sessions = SessionRepository::new(self.db);
        let Some(session) = sessions.get(self.token.as_str()).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        if session.is_expired(Utc::now()) {
            sessions.delete(&session.token).await?;
            return Err(AuthError::SessionExpired(session.user_id).into());
        }

        let Some(user) = UserRepository::new(self.db).get(&session.user_id).await? else {
            return Err(AuthError::UserNotInStore(session.user_id).into());
        };

        Ok(user)
    }

    /// Authenticates the caller and checks every permission.
    pub async fn require(&self, permissions: &[Permission<'_>]) -> Result<User, AppError> {
        let user = self.authenticate().await?;
        self.check(&user, permissions).await?;
        Ok(user)
    }

    /// Checks permissions for an already authenticated user.
    ///
    /// Team permissions on a team that does not exist fail with 404 before any access check.
    pub async fn check(&self, user: &User, permissions: &[Permission<'_>]) -> Result<(), AppError> {
        for permission in permissions {
            match *permission {
                Permission::TeamMember(team_id) => {
                    self.membership(user, team_id).await?;
                }
                Permission::TeamCoach(team_id) => {
                    let member = self.membership(user, team_id).await?;
                    if !member.is_active_coach() {
                        return Err(AuthError::AccessDenied(
                            user.id.clone(),
                            "Only coaches of this team can do this".to_string(),
                        )
                        .into());
                    }
                }
                Permission::TeamCreator(team_id) => {
                    let team = self.team(team_id).await?;
                    if team.created_by != user.id {
                        return Err(AuthError::AccessDenied(
                            user.id.clone(),
                            "Only the team creator can do this".to_string(),
                        )
                        .into());
                    }
                }
                Permission::User(user_id) => {
                    if user.id != user_id {
                        return Err(AuthError::AccessDenied(
                            user.id.clone(),
                            "You can only access your own account".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(())
    }

    /// Returns the user's active membership of the team.
    ///
    /// # Returns
    /// - `Ok(TeamMember)` - User is an active member
    /// - `Err(AppError::NotFound)` - Team does not exist
    /// - `Err(AuthError::AccessDenied)` - User is not an active member
    pub async fn membership(&self, user: &User, team_id: &str) -> Result<TeamMember, AppError> {
        let team = self.team(team_id).await?;

        MemberRepository::new(self.db)
            .find_active(&team.id, &user.id)
            .await?
            .ok_or_else(|| {
                AuthError::AccessDenied(
                    user.id.clone(),
                    "You are not a member of this team".to_string(),
                )
                .into()
            })
    }

    async fn team(&self, team_id: &str) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .get(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }
}
