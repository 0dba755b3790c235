use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Attend,
    Late,
    Injured,
    Absent,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDto {
    pub id: String,
    pub event_id: String,
    /// Player the record is about.
    pub user_id: String,
    pub indicated_status: Option<AttendanceStatus>,
    pub indicated_at: Option<DateTime<Utc>>,
    pub indicated_by: Option<String>,
    pub actual_status: Option<AttendanceStatus>,
    pub recorded_at: Option<DateTime<Utc>>,
    pub recorded_by: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndicateAttendanceDto {
    pub event_id: String,
    pub player_id: String,
    pub indicated_status: AttendanceStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttendanceDto {
    pub indicated_status: Option<AttendanceStatus>,
    pub actual_status: Option<AttendanceStatus>,
}
