//! Attendance workflows: indications ahead of an event and coach-recorded outcomes.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{attendance::AttendanceRepository, member::MemberRepository},
    error::{auth::AuthError, AppError},
    model::{
        attendance::{Attendance, IndicateAttendanceParams, UpdateAttendanceParams},
        event::Event,
        member::TeamMember,
    },
    util::id,
};

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

/// Whether `caller` may report attendance intent on behalf of `player_id`.
fn can_indicate_for(caller: &TeamMember, player_id: &str) -> bool {
    caller.user_id == player_id || caller.is_active_coach() || caller.is_parent_of(player_id)
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a player's intended attendance, updating the existing record if there is one.
    ///
    /// # Arguments
    /// - `caller` - Caller's active membership of the event's team; recorded as `indicated_by`
    /// - `event` - Event the indication is for
    /// - `params` - Player and status
    ///
    /// # Returns
    /// - `Ok(Attendance)` - Created or updated record
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller is not the player, a parent of the
    ///   player or a coach
    /// - `Err(AppError::BadRequest)` - Player is not an active member of the team
    pub async fn indicate(
        &self,
        caller: &TeamMember,
        event: &Event,
        params: IndicateAttendanceParams,
    ) -> Result<Attendance, AppError> {
        if !can_indicate_for(caller, &params.player_id) {
            return Err(AuthError::AccessDenied(
                caller.user_id.clone(),
                "You may only indicate attendance for yourself or your children".to_string(),
            )
            .into());
        }

        let tx = self.db.begin().await?;
        if MemberRepository::new(&tx)
            .find_active(&event.team_id, &params.player_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(
                "Player is not an active member of this team".to_string(),
            ));
        }

        let repo = AttendanceRepository::new(&tx);
        let mut record = match repo
            .find_by_event_and_player(&event.id, &params.player_id)
            .await?
        {
            Some(existing) => existing,
            None => Attendance {
                id: id::new_id("attendance"),
                event_id: event.id.clone(),
                user_id: params.player_id.clone(),
                indicated_status: None,
                indicated_at: None,
                indicated_by: None,
                actual_status: None,
                recorded_at: None,
                recorded_by: None,
            },
        };
        record.indicated_status = Some(params.indicated_status);
        record.indicated_at = Some(Utc::now());
        record.indicated_by = Some(caller.user_id.clone());

        repo.save(&record).await?;
        tx.commit().await?;

        Ok(record)
    }

    /// Attendance records of an event, ordered by player id.
    pub async fn list(&self, event_id: &str) -> Result<Vec<Attendance>, AppError> {
        Ok(AttendanceRepository::new(self.db)
            .get_by_event(event_id)
            .await?)
    }

    /// Loads an attendance record.
    ///
    /// # Returns
    /// - `Ok(Attendance)` - Record exists
    /// - `Err(AppError::NotFound)` - No record with that id
    pub async fn get(&self, attendance_id: &str) -> Result<Attendance, AppError> {
        AttendanceRepository::new(self.db)
            .get(attendance_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Attendance record not found".to_string()))
    }

    /// Changes the indicated or recorded status of an existing record.
    ///
    /// Recording the actual status is reserved to coaches; changing the indicated status
    /// follows the same rules as [`AttendanceService::indicate`].
    pub async fn update(
        &self,
        caller: &TeamMember,
        mut record: Attendance,
        params: UpdateAttendanceParams,
    ) -> Result<Attendance, AppError> {
        if params.actual_status.is_some() && !caller.is_active_coach() {
            return Err(AuthError::AccessDenied(
                caller.user_id.clone(),
                "Only coaches can record actual attendance".to_string(),
            )
            .into());
        }
        if params.indicated_status.is_some() && !can_indicate_for(caller, &record.user_id) {
            return Err(AuthError::AccessDenied(
                caller.user_id.clone(),
                "You may only indicate attendance for yourself or your children".to_string(),
            )
            .into());
        }

        params.apply(&mut record, &caller.user_id, Utc::now());
        AttendanceRepository::new(self.db).save(&record).await?;

        Ok(record)
    }
}
