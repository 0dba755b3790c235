use crate::server::data::team::TeamRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests resolving a seeded team by its code.
///
/// Expected: Ok(Some(team))
#[tokio::test]
async fn finds_team_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::user::create_user_with_role(db, "coach").await?;
    let seeded = factory::team::TeamFactory::new(db, &coach.id)
        .code("12345678")
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let team = repo.find_by_code("12345678").await?;

    assert_eq!(team.map(|t| t.id), Some(seeded.id));
    assert!(repo.code_exists("12345678").await?);
    assert!(repo.find_by_code("87654321").await?.is_none());

    Ok(())
}

/// Tests that the user's team list follows the user index and skips deleted teams.
///
/// Expected: Ok([team])
#[tokio::test]
async fn lists_user_teams_skipping_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::user::create_user_with_role(db, "coach").await?;
    let seeded = factory::team::create_team(db, &coach.id).await?;

    let repo = TeamRepository::new(db);
    repo.add_to_user(&coach.id, "team_deleted").await?;

    let teams = repo.get_by_user(&coach.id).await?;

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, seeded.id);

    Ok(())
}
