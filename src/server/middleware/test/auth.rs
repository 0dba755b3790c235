use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::session::SessionRepository,
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        token::BearerToken,
    },
};

/// Tests a valid session resolves to its user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn authenticates_valid_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let token = BearerToken(factory::session::create_session(db, &user.id).await?);

    let authenticated = AuthGuard::new(db, &token).authenticate().await?;

    assert_eq!(authenticated.id, user.id);

    Ok(())
}

/// Tests an unknown token is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let token = BearerToken("not-a-session".to_string());
    let result = AuthGuard::new(db, &token).authenticate().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests an expired session is rejected and removed.
///
/// Expected: Err(AuthError::SessionExpired) and the session deleted
#[tokio::test]
async fn rejects_and_deletes_expired_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let raw = factory::session::create_session_expiring(
        db,
        &user.id,
        Utc::now() - Duration::minutes(1),
    )
    .await?;
    let token = BearerToken(raw.clone());

    let result = AuthGuard::new(db, &token).authenticate().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::SessionExpired(_)))
    ));
    assert!(SessionRepository::new(db).get(&raw).await?.is_none());

    Ok(())
}

/// Tests a session whose user was deleted is rejected.
///
/// Expected: Err(AuthError::UserNotInStore)
#[tokio::test]
async fn rejects_session_of_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let token = BearerToken(factory::session::create_session(db, "user_deleted").await?);
    let result = AuthGuard::new(db, &token).authenticate().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInStore(_)))
    ));

    Ok(())
}

/// Tests team permissions for coach, player and outsider.
///
/// Expected: coach passes every team check, player only membership, outsider none
#[tokio::test]
async fn checks_team_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::user::create_user_with_role(db, "coach").await?;
    let player = factory::user::create_user(db).await?;
    let outsider = factory::user::create_user(db).await?;
    let team = factory::team::create_team(db, &coach.id).await?;
    factory::member::add_member(db, &team.id, &player.id, "player").await?;

    let coach_token = BearerToken(factory::session::create_session(db, &coach.id).await?);
    let player_token = BearerToken(factory::session::create_session(db, &player.id).await?);
    let outsider_token = BearerToken(factory::session::create_session(db, &outsider.id).await?);

    AuthGuard::new(db, &coach_token)
        .require(&[
            Permission::TeamMember(&team.id),
            Permission::TeamCoach(&team.id),
            Permission::TeamCreator(&team.id),
        ])
        .await?;

    let player_guard = AuthGuard::new(db, &player_token);
    player_guard
        .require(&[Permission::TeamMember(&team.id)])
        .await?;
    assert!(matches!(
        player_guard
            .require(&[Permission::TeamCoach(&team.id)])
            .await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    assert!(matches!(
        AuthGuard::new(db, &outsider_token)
            .require(&[Permission::TeamMember(&team.id)])
            .await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests team permissions on a missing team report 404 and user permissions compare ids.
///
/// Expected: NotFound for the team, AccessDenied for another user's id
#[tokio::test]
async fn missing_team_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let token = BearerToken(factory::session::create_session(db, &user.id).await?);
    let guard = AuthGuard::new(db, &token);

    assert!(matches!(
        guard.require(&[Permission::TeamMember("team_missing")]).await,
        Err(AppError::NotFound(_))
    ));

    guard.require(&[Permission::User(&user.id)]).await?;
    assert!(matches!(
        guard.require(&[Permission::User("user_other")]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
