use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    model::{
        api::ErrorDto,
        attendance::{AttendanceDto, IndicateAttendanceDto, UpdateAttendanceDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, token::BearerToken},
        model::attendance::{Attendance, IndicateAttendanceParams, UpdateAttendanceParams},
        service::{attendance::AttendanceService, event::EventService},
        state::AppState,
    },
};

/// Tag for grouping attendance endpoints in OpenAPI documentation
pub static ATTENDANCE_TAG: &str = "attendance";

/// Indicate whether a player will attend an event.
///
/// Players answer for themselves, parents for their children and coaches for anyone on the
/// roster. A second indication for the same player replaces the first.
///
/// # Returns
/// - `201 Created` - Created or updated record
/// - `400 Bad Request` - Player is not an active member of the team
/// - `403 Forbidden` - Caller may not answer for this player
/// - `404 Not Found` - Event not found
#[utoipa::path(
    post,
    path = "/api/attendance",
    tag = ATTENDANCE_TAG,
    request_body = IndicateAttendanceDto,
    responses(
        (status = 201, description = "Attendance indicated", body = AttendanceDto),
        (status = 400, description = "Player not on the team", body = ErrorDto),
        (status = 403, description = "Not allowed to answer for this player", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn indicate_attendance(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Json(payload), _): WithRejection<Json<IndicateAttendanceDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &token);
    let user = guard.authenticate().await?;

    let params = IndicateAttendanceParams::from_dto(payload);
    let event = EventService::new(&state.db).get(&params.event_id).await?;
    let membership = guard.membership(&user, &event.team_id).await?;

    let record = AttendanceService::new(&state.db)
        .indicate(&membership, &event, params)
        .await?;

    Ok((StatusCode::CREATED, Json(record.into_dto())))
}

/// Attendance records of an event.
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/attendance",
    tag = ATTENDANCE_TAG,
    params(
        ("event_id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Attendance records", body = Vec<AttendanceDto>),
        (status = 403, description = "Not a member of the team", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn get_event_attendance(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path(event_id), _): WithRejection<Path<String>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &token);
    let user = guard.authenticate().await?;

    let event = EventService::new(&state.db).get(&event_id).await?;
    guard.membership(&user, &event.team_id).await?;

    let records = AttendanceService::new(&state.db).list(&event.id).await?;
    let dtos: Vec<AttendanceDto> = records.into_iter().map(Attendance::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Change an attendance record.
///
/// Only coaches may record the actual status.
#[utoipa::path(
    patch,
    path = "/api/attendance/{attendance_id}",
    tag = ATTENDANCE_TAG,
    params(
        ("attendance_id" = String, Path, description = "Attendance record ID")
    ),
    request_body = UpdateAttendanceDto,
    responses(
        (status = 200, description = "Attendance updated", body = AttendanceDto),
        (status = 403, description = "Not allowed to change this record", body = ErrorDto),
        (status = 404, description = "Attendance record not found", body = ErrorDto)
    ),
)]
pub async fn update_attendance(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path(attendance_id), _): WithRejection<Path<String>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateAttendanceDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &token);
    let user = guard.authenticate().await?;

    let service = AttendanceService::new(&state.db);
    let record = service.get(&attendance_id).await?;
    let event = EventService::new(&state.db).get(&record.event_id).await?;
    let membership = guard.membership(&user, &event.team_id).await?;

    let record = service
        .update(&membership, record, UpdateAttendanceParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}
