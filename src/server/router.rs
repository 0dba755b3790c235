use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        attendance::{self, ATTENDANCE_TAG},
        auth::{self, AUTH_TAG},
        event::{self, EVENT_TAG},
        health::{self, HEALTH_TAG},
        join_request::{self, JOIN_REQUEST_TAG},
        member::{self, MEMBER_TAG},
        message::{self, MESSAGE_TAG},
        team::{self, TEAM_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Team Hub API",
        description = "Team management for coaches, players and parents"
    ),
    tags(
        (name = AUTH_TAG, description = "Accounts and sessions"),
        (name = TEAM_TAG, description = "Teams and statistics"),
        (name = MEMBER_TAG, description = "Team rosters"),
        (name = JOIN_REQUEST_TAG, description = "Requests to join a team"),
        (name = MESSAGE_TAG, description = "Team messaging"),
        (name = EVENT_TAG, description = "Team schedule"),
        (name = ATTENDANCE_TAG, description = "Event attendance"),
        (name = USER_TAG, description = "User profiles"),
        (name = HEALTH_TAG, description = "Liveness probe")
    )
)]
struct ApiDoc;

/// Builds the application router with OpenAPI docs served at `/swagger-ui`.
pub fn router(state: AppState) -> Router {
    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(auth::signup))
        .routes(routes!(auth::signin))
        .routes(routes!(auth::signout))
        .routes(routes!(auth::get_user))
        .routes(routes!(team::create_team))
        .routes(routes!(team::get_team, team::update_team))
        .routes(routes!(team::get_user_teams))
        .routes(routes!(team::get_team_stats))
        .routes(routes!(team::get_player_stats))
        .routes(routes!(member::get_team_members))
        .routes(routes!(member::update_member, member::delete_member))
        .routes(routes!(join_request::create_join_request))
        .routes(routes!(join_request::get_pending_join_requests))
        .routes(routes!(join_request::approve_join_request))
        .routes(routes!(join_request::reject_join_request))
        .routes(routes!(message::send_message))
        .routes(routes!(message::get_team_messages))
        .routes(routes!(message::get_message_thread))
        .routes(routes!(event::create_event))
        .routes(routes!(event::get_team_events))
        .routes(routes!(event::update_event, event::delete_event))
        .routes(routes!(attendance::indicate_attendance))
        .routes(routes!(attendance::get_event_attendance))
        .routes(routes!(attendance::update_attendance))
        .routes(routes!(user::get_user, user::update_user))
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use test_utils::builder::TestBuilder;
    use tower::ServiceExt;

    use super::router;
    use crate::server::state::AppState;

    async fn app() -> Router {
        let test = TestBuilder::new().with_kv_store().build().await.unwrap();
        let db = test.db.unwrap();

        router(AppState::new(db, chrono::Duration::hours(1), 4))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(body: Body) -> Value {
        let bytes = to_bytes(body, usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_responds_ok() {
        let app = app().await;

        let response = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn rejects_requests_without_token() {
        let app = app().await;

        let response = app
            .oneshot(Request::get("/api/auth/user").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn serves_openapi_document() {
        let app = app().await;

        let response = app
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let doc = read_json(response.into_body()).await;
        assert!(doc["paths"]["/api/teams/{team_id}"].is_object());
    }

    #[tokio::test]
    async fn signup_then_signin_grants_access() {
        let app = app().await;

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/auth/signup",
                json!({
                    "email": "Coach@Example.com",
                    "password": "secret123",
                    "role": "coach",
                    "firstName": "Dana",
                    "lastName": "Reyes"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/auth/signin",
                json!({ "email": "coach@example.com", "password": "secret123" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response.into_body()).await;
        let token = body["accessToken"].as_str().unwrap().to_string();
        assert_eq!(body["user"]["firstName"], "Dana");

        let response = app
            .oneshot(
                Request::get("/api/auth/user")
                    .header(header::AUTHORIZATION, format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let user = read_json(response.into_body()).await;
        assert_eq!(user["email"], "coach@example.com");
    }

    #[tokio::test]
    async fn unknown_enum_value_is_a_json_bad_request() {
        let app = app().await;

        let response = app
            .oneshot(post_json(
                "/api/auth/signup",
                json!({
                    "email": "someone@example.com",
                    "password": "secret123",
                    "role": "admin",
                    "firstName": "Alex",
                    "lastName": "Kim"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response.into_body()).await;
        assert!(body["error"].as_str().unwrap().contains("admin"));
    }

    #[tokio::test]
    async fn missing_content_type_is_a_json_bad_request() {
        let app = app().await;

        let response = app
            .oneshot(
                Request::post("/api/auth/signin")
                    .body(Body::from(
                        json!({ "email": "a@example.com", "password": "secret123" }).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response.into_body()).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn malformed_body_is_a_json_bad_request() {
        let app = app().await;

        let response = app
            .oneshot(
                Request::post("/api/auth/signin")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response.into_body()).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn signin_with_wrong_password_is_rejected() {
        let app = app().await;

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/auth/signup",
                json!({
                    "email": "player@example.com",
                    "password": "secret123",
                    "role": "player",
                    "firstName": "Sam",
                    "lastName": "Lee"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(post_json(
                "/api/auth/signin",
                json!({ "email": "player@example.com", "password": "wrong-password" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
