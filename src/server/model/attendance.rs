//! Attendance domain model and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::attendance::{
    AttendanceDto, AttendanceStatus, IndicateAttendanceDto, UpdateAttendanceDto,
};

/// Attendance of one player at one event, stored under `attendance:<id>`. The pair key
/// `attendance:<eventId>:<playerId>` holds the id so there is one record per pair.
///
/// `indicated_*` is the intent reported ahead of time by the player, a parent or a coach.
/// `actual_*` is what a coach recorded afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub indicated_status: Option<AttendanceStatus>,
    pub indicated_at: Option<DateTime<Utc>>,
    pub indicated_by: Option<String>,
    pub actual_status: Option<AttendanceStatus>,
    pub recorded_at: Option<DateTime<Utc>>,
    pub recorded_by: Option<String>,
}

impl Attendance {
    /// Whether the recorded status counts as having been there.
    pub fn attended(&self) -> bool {
        matches!(
            self.actual_status,
            Some(AttendanceStatus::Attend) | Some(AttendanceStatus::Late)
        )
    }

    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            id: self.id,
            event_id: self.event_id,
            user_id: self.user_id,
            indicated_status: self.indicated_status,
            indicated_at: self.indicated_at,
            indicated_by: self.indicated_by,
            actual_status: self.actual_status,
            recorded_at: self.recorded_at,
            recorded_by: self.recorded_by,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IndicateAttendanceParams {
    pub event_id: String,
    pub player_id: String,
    pub indicated_status: AttendanceStatus,
}

impl IndicateAttendanceParams {
    pub fn from_dto(dto: IndicateAttendanceDto) -> Self {
        Self {
            event_id: dto.event_id,
            player_id: dto.player_id,
            indicated_status: dto.indicated_status,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAttendanceParams {
    pub indicated_status: Option<AttendanceStatus>,
    pub actual_status: Option<AttendanceStatus>,
}

impl UpdateAttendanceParams {
    pub fn from_dto(dto: UpdateAttendanceDto) -> Self {
        Self {
            indicated_status: dto.indicated_status,
            actual_status: dto.actual_status,
        }
    }

    /// Applies supplied statuses, stamping the editor and time on each changed side.
    pub fn apply(self, record: &mut Attendance, editor_id: &str, now: DateTime<Utc>) {
        if let Some(status) = self.indicated_status {
            record.indicated_status = Some(status);
            record.indicated_at = Some(now);
            record.indicated_by = Some(editor_id.to_string());
        }
        if let Some(status) = self.actual_status {
            record.actual_status = Some(status);
            record.recorded_at = Some(now);
            record.recorded_by = Some(editor_id.to_string());
        }
    }
}
