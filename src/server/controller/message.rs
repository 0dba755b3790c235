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
        message::{MessageDto, MessageThreadDto, SendMessageDto},
    },
    server::{
        controller::param::MessageListQuery,
        error::AppError,
        middleware::{auth::AuthGuard, token::BearerToken},
        model::message::{Message, SendMessageParams},
        service::message::MessageService,
        state::AppState,
    },
};

/// Tag for grouping messaging endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "message";

/// Send a message to the team.
///
/// Coaches may address any group. Players may address everyone or the coaches; parents
/// may also address other parents.
///
/// # Access Control
/// - `TeamMember` - Active members of the target team
///
/// # Returns
/// - `201 Created` - Message stored
/// - `400 Bad Request` - Empty subject or body, missing individual recipients, or a reply to
///   a message of another team
/// - `403 Forbidden` - Not a member, or the role may not use the recipient type
/// - `404 Not Found` - Team not found
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message sent", body = MessageDto),
        (status = 400, description = "Invalid message", body = ErrorDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 403, description = "Not allowed to send this message", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Json(payload), _): WithRejection<Json<SendMessageDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &token);
    let user = guard.authenticate().await?;

    let params = SendMessageParams::from_dto(payload)?;
    let membership = guard.membership(&user, &params.team_id).await?;
    let message = MessageService::new(&state.db)
        .send(&user, &membership, params)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Messages visible to the caller, newest first.
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/messages",
    tag = MESSAGE_TAG,
    params(
        ("team_id" = String, Path, description = "Team ID"),
        ("q" = Option<String>, Query, description = "Search subject, sender name and body")
    ),
    responses(
        (status = 200, description = "Visible messages", body = Vec<MessageDto>),
        (status = 403, description = "Not a member of the team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn get_team_messages(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path(team_id), _): WithRejection<Path<String>, AppError>,
    WithRejection(Query(query), _): WithRejection<Query<MessageListQuery>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &token);
    let user = guard.authenticate().await?;
    let membership = guard.membership(&user, &team_id).await?;

    let messages = MessageService::new(&state.db)
        .list(&membership, query.q.as_deref())
        .await?;
    let dtos: Vec<MessageDto> = messages.into_iter().map(Message::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// A message with its replies.
#[utoipa::path(
    get,
    path = "/api/messages/{message_id}/thread",
    tag = MESSAGE_TAG,
    params(
        ("message_id" = String, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message thread", body = MessageThreadDto),
        (status = 403, description = "Message not visible to the caller", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto)
    ),
)]
pub async fn get_message_thread(
    State(state): State<AppState>,
    token: BearerToken,
    WithRejection(Path(message_id), _): WithRejection<Path<String>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &token);
    let user = guard.authenticate().await?;

    let service = MessageService::new(&state.db);
    let message = service.get(&message_id).await?;
    let membership = guard.membership(&user, &message.team_id).await?;
    let thread = service.thread(&membership, message).await?;

    Ok((StatusCode::OK, Json(thread.into_dto())))
}
