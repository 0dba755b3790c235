use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    model::{
        api::ErrorDto,
        member::{MemberDto, MemberStatus, MemberWithUserDto, UpdateMemberDto},
        user::UserRole,
    },
    server::{
        controller::param::MemberListQuery,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            token::BearerToken,
        },
        model::member::{MemberFilter, MemberWithUser, UpdateMemberParams},
        service::member::MemberService,
        state::AppState,
    },
};

/// Tag for grouping roster endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// List a team's members with their profiles.
///
/// # Access Control
/// - `TeamMember` - Active members only
///
/// # Returns
/// - `200 OK` - Members in roster order, optionally filtered by role and status
/// - `403 Forbidden` - Not a member of the team
/// - `404 Not Found` - Team not found
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/members",
    tag = MEMBER_TAG,
    params(
        ("team_id" = String, Path, description = "Team ID"),
        ("role" = Option<UserRole>, Query, description = "Only members with this role"),
        ("status" = Option<MemberStatus>, Query, description = "Only members with this status")
    ),
    responses(
        (status = 200, description = "Team roster", body = Vec<MemberWithUserDto>),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 403, description = "Not a member of the team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn get_team_members(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path(team_id), _): WithRejection<Path<String>, AppError>,
    WithRejection(Query(query), _): WithRejection<Query<MemberListQuery>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::TeamMember(&team_id)])
        .await?;

    let filter = MemberFilter {
        role: query.role,
        status: query.status,
    };
    let members = MemberService::new(&state.db).list(&team_id, filter).await?;
    let dtos: Vec<MemberWithUserDto> = members.into_iter().map(MemberWithUser::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Update a membership.
///
/// # Access Control
/// - `TeamCoach` - Active coaches of the member's team
#[utoipa::path(
    patch,
    path = "/api/members/{member_id}",
    tag = MEMBER_TAG,
    params(
        ("member_id" = String, Path, description = "Member ID")
    ),
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Member updated", body = MemberDto),
        (status = 400, description = "Invalid member data", body = ErrorDto),
        (status = 403, description = "Not a coach of the team", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto)
    ),
)]
pub async fn update_member(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path(member_id), _): WithRejection<Path<String>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateMemberDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &token);
    let user = guard.authenticate().await?;

    let service = MemberService::new(&state.db);
    let member = service.get(&member_id).await?;
    guard
        .check(&user, &[Permission::TeamCoach(&member.team_id)])
        .await?;

    let params = UpdateMemberParams::from_dto(payload)?;
    let member = service.update(&member_id, params).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Remove a member from the team.
///
/// The creator's own membership cannot be removed.
///
/// # Access Control
/// - `TeamCreator` - Only the team creator
///
/// # Returns
/// - `204 No Content` - Member removed
/// - `400 Bad Request` - Attempt to remove the creator
/// - `403 Forbidden` - Caller did not create the team
/// - `404 Not Found` - Member not found
#[utoipa::path(
    delete,
    path = "/api/members/{member_id}",
    tag = MEMBER_TAG,
    params(
        ("member_id" = String, Path, description = "Member ID")
    ),
    responses(
        (status = 204, description = "Member removed"),
        (status = 400, description = "The team creator cannot be removed", body = ErrorDto),
        (status = 403, description = "Not the team creator", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto)
    ),
)]
pub async fn delete_member(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path(member_id), _): WithRejection<Path<String>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &token);
    let user = guard.authenticate().await?;

    let service = MemberService::new(&state.db);
    let member = service.get(&member_id).await?;
    guard
        .check(&user, &[Permission::TeamCreator(&member.team_id)])
        .await?;

    service.delete(&member_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
