use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::WithRejection;

use crate::{
    model::{
        api::ErrorDto,
        auth::{SigninDto, SigninResponseDto, SignupDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, token::BearerToken},
        model::user::SignupParams,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Create an account.
///
/// Validates the signup form, stores the profile and a bcrypt hash of the password. The new
/// account must sign in separately to obtain an access token.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Invalid fields or email already registered
/// - `500 Internal Server Error` - Store or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid signup data or email taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<SignupDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let params = SignupParams::from_dto(payload)?;
    let user = AuthService::new(&state.db)
        .signup(params, state.bcrypt_cost)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Sign in with email and password.
///
/// # Returns
/// - `200 OK` - Access token and profile
/// - `400 Bad Request` - Invalid login credentials
/// - `500 Internal Server Error` - Store or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    tag = AUTH_TAG,
    request_body = SigninDto,
    responses(
        (status = 200, description = "Signed in", body = SigninResponseDto),
        (status = 400, description = "Invalid login credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signin(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<SigninDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let (session, user) = AuthService::new(&state.db)
        .signin(&payload.email, &payload.password, state.session_ttl)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SigninResponseDto {
            access_token: session.token,
            user: user.into_dto(),
        }),
    ))
}

/// End the current session.
#[utoipa::path(
    post,
    path = "/api/auth/signout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Signed out"),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto)
    ),
)]
pub async fn signout(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).authenticate().await?;

    AuthService::new(&state.db).signout(token.as_str()).await?;
    tracing::debug!("User {} signed out", user.id);

    Ok(StatusCode::NO_CONTENT)
}

/// Profile of the signed-in user.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).authenticate().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
