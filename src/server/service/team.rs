//! Team workflows: creation with a unique join code, updates, listings and statistics.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{member::MemberStatus, user::UserRole},
    server::{
        data::{
            attendance::AttendanceRepository, event::EventRepository, member::MemberRepository,
            team::TeamRepository,
        },
        error::AppError,
        model::{
            member::TeamMember,
            stats::{PlayerStats, TeamStats},
            team::{CreateTeamParams, Team, UpdateTeamParams},
            user::User,
        },
        util::id,
    },
};

/// Attempts at drawing a code that is not yet taken before giving up.
const MAX_CODE_ATTEMPTS: usize = 10;

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team and makes the creator its active coach.
    ///
    /// Draws random 8-digit codes until one is free, then writes the team, the code key, the
    /// coach membership and both index entries in one transaction.
    ///
    /// # Arguments
    /// - `creator` - Authenticated user creating the team
    /// - `params` - Validated team fields
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(AppError::InternalError)` - No free code found within the attempt limit
    /// - `Err(AppError::DbErr)` - Store error
    pub async fn create(&self, creator: &User, params: CreateTeamParams) -> Result<Team, AppError> {
        let tx = self.db.begin().await?;
        let teams = TeamRepository::new(&tx);
        let members = MemberRepository::new(&tx);

        let mut code = None;
        for _ in 0..MAX_CODE_ATTEMPTS {
            let candidate = id::generate_team_code();
            if !teams.code_exists(&candidate).await? {
                code = Some(candidate);
                break;
            }
        }
        let Some(code) = code else {
            return Err(AppError::InternalError(format!(
                "No free team code after {} attempts",
                MAX_CODE_ATTEMPTS
            )));
        };

        let now = Utc::now();
        let team = Team {
            id: id::new_id("team"),
            name: params.name,
            code,
            logo_url: params.logo_url,
            color: params.color,
            created_at: now,
            created_by: creator.id.clone(),
        };
        let coach = TeamMember {
            id: id::new_id("member"),
            team_id: team.id.clone(),
            user_id: creator.id.clone(),
            role: UserRole::Coach,
            status: MemberStatus::Active,
            joined_at: Some(now),
            notes: String::new(),
            player_info: None,
            parent_info: None,
        };

        teams.save(&team).await?;
        teams.save_code(&team.code, &team.id).await?;
        members.save(&coach).await?;
        members.add_to_team(&team.id, &coach.id).await?;
        teams.add_to_user(&creator.id, &team.id).await?;
        tx.commit().await?;

        tracing::info!("User {} created team {} ({})", creator.id, team.id, team.name);

        Ok(team)
    }

    /// Loads a team.
    ///
    /// # Returns
    /// - `Ok(Team)` - Team exists
    /// - `Err(AppError::NotFound)` - No team with that id
    pub async fn get(&self, team_id: &str) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .get(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }

    /// Applies the supplied fields to a team.
    pub async fn update(&self, team_id: &str, params: UpdateTeamParams) -> Result<Team, AppError> {
        let mut team = self.get(team_id).await?;
        params.apply(&mut team);
        TeamRepository::new(self.db).save(&team).await?;

        Ok(team)
    }

    /// Teams in the user's team index. Teams deleted out from under the index are skipped.
    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<Team>, AppError> {
        Ok(TeamRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Win/loss record and roster counts for a team.
    pub async fn stats(&self, team_id: &str) -> Result<TeamStats, AppError> {
        let events = EventRepository::new(self.db).get_by_team(team_id).await?;
        let members = MemberRepository::new(self.db).get_by_team(team_id).await?;

        Ok(TeamStats::compute(&events, &members))
    }

    /// Attendance record of one player across the team's events.
    ///
    /// # Returns
    /// - `Ok(PlayerStats)` - Stats, all zero when nothing was recorded
    /// - `Err(AppError::NotFound)` - The user is not a player of the team
    pub async fn player_stats(&self, team_id: &str, player_id: &str) -> Result<PlayerStats, AppError> {
        let is_player = MemberRepository::new(self.db)
            .get_by_team(team_id)
            .await?
            .iter()
            .any(|m| m.user_id == player_id && m.role == UserRole::Player);
        if !is_player {
            return Err(AppError::NotFound("Player not found on this team".to_string()));
        }

        let attendance = AttendanceRepository::new(self.db);
        let mut records = Vec::new();
        for event in EventRepository::new(self.db).get_by_team(team_id).await? {
            if let Some(record) = attendance
                .find_by_event_and_player(&event.id, player_id)
                .await?
            {
                records.push((event, record));
            }
        }

        Ok(PlayerStats::compute(player_id, &records))
    }
}
