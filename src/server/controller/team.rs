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
        team::{CreateTeamDto, PlayerStatsDto, TeamDto, TeamStatsDto, UpdateTeamDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            token::BearerToken,
        },
        model::team::{CreateTeamParams, Team, UpdateTeamParams},
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Create a team.
///
/// Generates a unique 8-digit join code and makes the caller the team's first active coach.
///
/// # Access Control
/// - Any signed-in user
///
/// # Returns
/// - `201 Created` - Team created
/// - `400 Bad Request` - Empty name, malformed logo URL or color
/// - `401 Unauthorized` - Missing or invalid access token
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Team created", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Json(payload), _): WithRejection<Json<CreateTeamDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let params = CreateTeamParams::from_dto(payload)?;
    let team = TeamService::new(&state.db).create(&user, params).await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

/// Get a team.
///
/// # Access Control
/// - `TeamMember` - Active members only
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = String, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team", body = TeamDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 403, description = "Not a member of the team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path(team_id), _): WithRejection<Path<String>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::TeamMember(&team_id)])
        .await?;

    let team = TeamService::new(&state.db).get(&team_id).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Update a team's name, logo or color.
///
/// The code, id and creator cannot be changed.
///
/// # Access Control
/// - `TeamCreator` - Only the user who created the team
///
/// # Returns
/// - `200 OK` - Updated team
/// - `400 Bad Request` - Invalid fields
/// - `403 Forbidden` - Caller did not create the team
/// - `404 Not Found` - Team not found
#[utoipa::path(
    patch,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = String, Path, description = "Team ID")
    ),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Team updated", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 403, description = "Not the team creator", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path(team_id), _): WithRejection<Path<String>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateTeamDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::TeamCreator(&team_id)])
        .await?;

    let params = UpdateTeamParams::from_dto(payload)?;
    let team = TeamService::new(&state.db).update(&team_id, params).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Teams the user belongs to.
///
/// # Access Control
/// - `User` - Callers can only list their own teams
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/teams",
    tag = TEAM_TAG,
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Teams of the user", body = Vec<TeamDto>),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 403, description = "Not the caller's own teams", body = ErrorDto)
    ),
)]
pub async fn get_user_teams(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path(user_id), _): WithRejection<Path<String>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::User(&user_id)])
        .await?;

    let teams = TeamService::new(&state.db).get_by_user(&user_id).await?;
    let dtos: Vec<TeamDto> = teams.into_iter().map(Team::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Win/loss record and roster counts.
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/stats",
    tag = TEAM_TAG,
    params(
        ("team_id" = String, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team statistics", body = TeamStatsDto),
        (status = 403, description = "Not a member of the team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn get_team_stats(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path(team_id), _): WithRejection<Path<String>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::TeamMember(&team_id)])
        .await?;

    let stats = TeamService::new(&state.db).stats(&team_id).await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Attendance statistics of one player.
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/players/{user_id}/stats",
    tag = TEAM_TAG,
    params(
        ("team_id" = String, Path, description = "Team ID"),
        ("user_id" = String, Path, description = "Player's user ID")
    ),
    responses(
        (status = 200, description = "Player statistics", body = PlayerStatsDto),
        (status = 403, description = "Not a member of the team", body = ErrorDto),
        (status = 404, description = "Team or player not found", body = ErrorDto)
    ),
)]
pub async fn get_player_stats(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path((team_id, user_id)), _): WithRejection<Path<(String, String)>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::TeamMember(&team_id)])
        .await?;

    let stats = TeamService::new(&state.db)
        .player_stats(&team_id, &user_id)
        .await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
