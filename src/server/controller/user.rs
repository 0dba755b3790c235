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
        user::{UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            token::BearerToken,
        },
        model::user::UpdateUserParams,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// A user's public profile.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path(user_id), _): WithRejection<Path<String>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token).require(&[]).await?;

    let user = UserService::new(&state.db).get(&user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Edit a profile.
///
/// # Access Control
/// - `User` - Only the profile's owner
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Empty name or malformed photo URL
/// - `403 Forbidden` - Not the profile's owner
#[utoipa::path(
    patch,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Invalid field value", body = ErrorDto),
        (status = 403, description = "Not the profile's owner", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path(user_id), _): WithRejection<Path<String>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateUserDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::User(&user_id)])
        .await?;

    let params = UpdateUserParams::from_dto(payload)?;
    let user = UserService::new(&state.db).update(&user_id, params).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
