use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        event::{CreateEventDto, EventDto, EventType, UpdateEventDto},
    },
    server::{
        controller::param::EventListQuery,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            token::BearerToken,
        },
        model::event::{CreateEventParams, Event, UpdateEventParams},
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping schedule endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Schedule a game, practice or team event.
///
/// # Access Control
/// - `TeamCoach` - Active coaches of the team
///
/// # Returns
/// - `201 Created` - Scheduled event
/// - `400 Bad Request` - Missing title or location, or malformed date or time
/// - `403 Forbidden` - Not a coach of the team
/// - `404 Not Found` - Team not found
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Invalid event", body = ErrorDto),
        (status = 403, description = "Not a coach of the team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Json(payload), _): WithRejection<Json<CreateEventDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token)
        .require(&[Permission::TeamCoach(&payload.team_id)])
        .await?;

    let params = CreateEventParams::from_dto(payload)?;
    let event = EventService::new(&state.db).create(&user, params).await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// A team's schedule.
///
/// `when=upcoming` lists events from today on in ascending order, `when=past` lists earlier
/// events newest first, and the default lists everything in ascending order.
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/events",
    tag = EVENT_TAG,
    params(
        ("team_id" = String, Path, description = "Team ID"),
        ("when" = Option<String>, Query, description = "upcoming, past or all"),
        ("type" = Option<EventType>, Query, description = "Only events of this type")
    ),
    responses(
        (status = 200, description = "Team events", body = Vec<EventDto>),
        (status = 403, description = "Not a member of the team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn get_team_events(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path(team_id), _): WithRejection<Path<String>, AppError>,
    WithRejection(Query(query), _): WithRejection<Query<EventListQuery>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::TeamMember(&team_id)])
        .await?;

    let events = EventService::new(&state.db)
        .list(
            &team_id,
            query.when,
            query.event_type,
            Utc::now().date_naive(),
        )
        .await?;
    let dtos: Vec<EventDto> = events.into_iter().map(Event::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Edit an event, including recording a game's score.
///
/// # Access Control
/// - `TeamCoach` - Active coaches of the event's team
#[utoipa::path(
    patch,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = String, Path, description = "Event ID")
    ),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 400, description = "Invalid field value", body = ErrorDto),
        (status = 403, description = "Not a coach of the team", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path(event_id), _): WithRejection<Path<String>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateEventDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &token);
    let user = guard.authenticate().await?;

    let service = EventService::new(&state.db);
    let event = service.get(&event_id).await?;
    guard
        .check(&user, &[Permission::TeamCoach(&event.team_id)])
        .await?;

    let params = UpdateEventParams::from_dto(payload)?;
    let event = service.update(&event_id, params).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Delete an event together with its attendance records.
///
/// # Access Control
/// - `TeamCoach` - Active coaches of the event's team
#[utoipa::path(
    delete,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 403, description = "Not a coach of the team", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path(event_id), _): WithRejection<Path<String>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &token);
    let user = guard.authenticate().await?;

    let service = EventService::new(&state.db);
    let event = service.get(&event_id).await?;
    guard
        .check(&user, &[Permission::TeamCoach(&event.team_id)])
        .await?;

    service.delete(&event_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
