use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{member::MemberStatus, user::UserRole},
    server::{
        data::{member::MemberRepository, team::TeamRepository},
        error::AppError,
        model::member::{MemberFilter, UpdateMemberParams},
        service::member::MemberService,
    },
};

/// Tests the roster embeds profiles and applies filters.
///
/// Expected: two members unfiltered, one player with the player filter
#[tokio::test]
async fn list_embeds_users_and_filters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::user::create_user_with_role(db, "coach").await?;
    let player = factory::user::create_user(db).await?;
    let team = factory::team::create_team(db, &coach.id).await?;
    factory::member::add_member(db, &team.id, &player.id, "player").await?;

    let service = MemberService::new(db);
    let all = service.list(&team.id, MemberFilter::default()).await?;
    assert_eq!(all.len(), 2);

    let players = service
        .list(
            &team.id,
            MemberFilter {
                role: Some(UserRole::Player),
                status: None,
            },
        )
        .await?;
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].user.id, player.id);
    assert_eq!(players[0].user.email, player.email);

    Ok(())
}

/// Tests members whose profile is gone are left out.
///
/// Expected: only the coach
#[tokio::test]
async fn list_skips_missing_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::user::create_user_with_role(db, "coach").await?;
    let team = factory::team::create_team(db, &coach.id).await?;
    factory::member::add_member(db, &team.id, "user_ghost", "player").await?;

    let roster = MemberService::new(db)
        .list(&team.id, MemberFilter::default())
        .await?;

    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].user.id, coach.id);

    Ok(())
}

/// Tests deleting a member removes it from both index lists.
///
/// Expected: gone from the team index, the user index and the store
#[tokio::test]
async fn delete_removes_from_both_indices() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::user::create_user_with_role(db, "coach").await?;
    let player = factory::user::create_user(db).await?;
    let team = factory::team::create_team(db, &coach.id).await?;
    let member_id = factory::member::add_member(db, &team.id, &player.id, "player").await?;

    MemberService::new(db).delete(&member_id).await?;

    let members = MemberRepository::new(db);
    assert!(members.get(&member_id).await?.is_none());
    assert!(members
        .get_by_team(&team.id)
        .await?
        .iter()
        .all(|m| m.id != member_id));
    assert!(TeamRepository::new(db)
        .get_by_user(&player.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests the creator's own membership cannot be deleted.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn delete_protects_creator() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::user::create_user_with_role(db, "coach").await?;
    let team = factory::team::create_team(db, &coach.id).await?;

    let result = MemberService::new(db).delete(&team.coach_member_id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests deactivating a member drops the team from the user's index.
///
/// Expected: status rejected, user index empty
#[tokio::test]
async fn update_syncs_user_index() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::user::create_user_with_role(db, "coach").await?;
    let player = factory::user::create_user(db).await?;
    let team = factory::team::create_team(db, &coach.id).await?;
    let member_id = factory::member::add_member(db, &team.id, &player.id, "player").await?;

    let updated = MemberService::new(db)
        .update(
            &member_id,
            UpdateMemberParams {
                status: Some(MemberStatus::Rejected),
                notes: Some("Moved away".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.status, MemberStatus::Rejected);
    assert_eq!(updated.notes, "Moved away");
    assert!(TeamRepository::new(db)
        .get_by_user(&player.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests removing a stale membership keeps the team listed while another is active.
///
/// Expected: team still in the user index after deleting and after editing the stale record
#[tokio::test]
async fn stale_membership_keeps_team_listed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::user::create_user_with_role(db, "coach").await?;
    let player = factory::user::create_user(db).await?;
    let team = factory::team::create_team(db, &coach.id).await?;
    factory::member::add_member(db, &team.id, &player.id, "player").await?;
    let stale_a = factory::member::MemberFactory::new(db, &team.id, &player.id)
        .status("rejected")
        .build()
        .await?;
    let stale_b = factory::member::MemberFactory::new(db, &team.id, &player.id)
        .status("pending")
        .build()
        .await?;

    let service = MemberService::new(db);
    let teams = TeamRepository::new(db);

    service
        .update(
            &stale_a,
            UpdateMemberParams {
                notes: Some("Old record".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(teams.get_by_user(&player.id).await?.len(), 1);

    service.delete(&stale_b).await?;
    let listed = teams.get_by_user(&player.id).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, team.id);

    Ok(())
}
