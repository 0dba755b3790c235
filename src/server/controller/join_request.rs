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
        join_request::{ApproveJoinRequestDto, CreateJoinRequestDto, JoinRequestDto},
        member::MemberDto,
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            token::BearerToken,
        },
        model::join_request::{
            ApproveJoinRequestParams, CreateJoinRequestParams, JoinRequest,
        },
        service::join_request::JoinRequestService,
        state::AppState,
    },
};

/// Tag for grouping join request endpoints in OpenAPI documentation
pub static JOIN_REQUEST_TAG: &str = "join_request";

/// Ask to join a team by its code.
///
/// The requested role defaults to the caller's profile role.
///
/// # Returns
/// - `201 Created` - Pending request
/// - `400 Bad Request` - Malformed code, already a member, or a request is already pending
/// - `404 Not Found` - Invalid team code
#[utoipa::path(
    post,
    path = "/api/join-requests",
    tag = JOIN_REQUEST_TAG,
    request_body = CreateJoinRequestDto,
    responses(
        (status = 201, description = "Join request created", body = JoinRequestDto),
        (status = 400, description = "Invalid code or duplicate request", body = ErrorDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 404, description = "Invalid team code", body = ErrorDto)
    ),
)]
pub async fn create_join_request(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Json(payload), _): WithRejection<Json<CreateJoinRequestDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let params = CreateJoinRequestParams::from_dto(payload)?;
    let request = JoinRequestService::new(&state.db)
        .create(&user, params)
        .await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// Pending join requests of a team.
///
/// # Access Control
/// - `TeamCoach` - Active coaches of the team
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/join-requests",
    tag = JOIN_REQUEST_TAG,
    params(
        ("team_id" = String, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Pending requests", body = Vec<JoinRequestDto>),
        (status = 403, description = "Not a coach of the team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn get_pending_join_requests(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path(team_id), _): WithRejection<Path<String>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::TeamCoach(&team_id)])
        .await?;

    let requests = JoinRequestService::new(&state.db)
        .list_pending(&team_id)
        .await?;
    let dtos: Vec<JoinRequestDto> = requests.into_iter().map(JoinRequest::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Approve a pending request.
///
/// Creates exactly one active membership with the requested role. The body is optional
/// and may carry player or parent details for the new membership.
///
/// # Access Control
/// - `TeamCoach` - Active coaches of the request's team
///
/// # Returns
/// - `201 Created` - New membership
/// - `400 Bad Request` - Request already reviewed or user already a member
/// - `403 Forbidden` - Not a coach of the team
/// - `404 Not Found` - Request not found
#[utoipa::path(
    post,
    path = "/api/join-requests/{request_id}/approve",
    tag = JOIN_REQUEST_TAG,
    params(
        ("request_id" = String, Path, description = "Join request ID")
    ),
    request_body(content = Option<ApproveJoinRequestDto>, description = "Optional member details"),
    responses(
        (status = 201, description = "Request approved", body = MemberDto),
        (status = 400, description = "Request is not pending", body = ErrorDto),
        (status = 403, description = "Not a coach of the team", body = ErrorDto),
        (status = 404, description = "Join request not found", body = ErrorDto)
    ),
)]
pub async fn approve_join_request(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path(request_id), _): WithRejection<Path<String>, AppError>,
    WithRejection(payload, _): WithRejection<Option<Json<ApproveJoinRequestDto>>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &token);
    let user = guard.authenticate().await?;

    let service = JoinRequestService::new(&state.db);
    let request = service.get(&request_id).await?;
    guard
        .check(&user, &[Permission::TeamCoach(&request.team_id)])
        .await?;

    let params = ApproveJoinRequestParams::from_dto(
        payload.map(|Json(dto)| dto).unwrap_or_default(),
    )?;
    let member = service.approve(&request_id, &user, params).await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

/// Reject a pending request.
///
/// # Access Control
/// - `TeamCoach` - Active coaches of the request's team
#[utoipa::path(
    post,
    path = "/api/join-requests/{request_id}/reject",
    tag = JOIN_REQUEST_TAG,
    params(
        ("request_id" = String, Path, description = "Join request ID")
    ),
    responses(
        (status = 204, description = "Request rejected"),
        (status = 400, description = "Request is not pending", body = ErrorDto),
        (status = 403, description = "Not a coach of the team", body = ErrorDto),
        (status = 404, description = "Join request not found", body = ErrorDto)
    ),
)]
pub async fn reject_join_request(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path(request_id), _): WithRejection<Path<String>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &token);
    let user = guard.authenticate().await?;

    let service = JoinRequestService::new(&state.db);
    let request = service.get(&request_id).await?;
    guard
        .check(&user, &[Permission::TeamCoach(&request.team_id)])
        .await?;

    service.reject(&request_id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}
