use crate::{
    model::attendance::AttendanceStatus,
    server::{data::attendance::AttendanceRepository, model::attendance::Attendance},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

fn record(id: &str, event_id: &str, user_id: &str) -> Attendance {
    Attendance {
        id: id.to_string(),
        event_id: event_id.to_string(),
        user_id: user_id.to_string(),
        indicated_status: Some(AttendanceStatus::Attend),
        indicated_at: None,
        indicated_by: None,
        actual_status: None,
        recorded_at: None,
        recorded_by: None,
    }
}

/// Tests the pair key resolves a player's record at an event.
///
/// Expected: Ok(Some(record))
#[tokio::test]
async fn finds_record_by_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AttendanceRepository::new(db);
    repo.save(&record("attendance_1", "event_1", "user_1")).await?;

    let found = repo.find_by_event_and_player("event_1", "user_1").await?;
    assert_eq!(found.map(|a| a.id), Some("attendance_1".to_string()));
    assert!(repo
        .find_by_event_and_player("event_1", "user_2")
        .await?
        .is_none());

    Ok(())
}

/// Tests listing an event's records does not pick up other events.
///
/// Expected: Ok(two records of event_1)
#[tokio::test]
async fn lists_records_per_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AttendanceRepository::new(db);
    repo.save(&record("attendance_1", "event_1", "user_1")).await?;
    repo.save(&record("attendance_2", "event_1", "user_2")).await?;
    repo.save(&record("attendance_3", "event_10", "user_1")).await?;

    let records = repo.get_by_event("event_1").await?;
    let ids: Vec<&str> = records.iter().map(|a| a.id.as_str()).collect();

    assert_eq!(ids, vec!["attendance_1", "attendance_2"]);

    Ok(())
}

/// Tests deleting an event's records removes both the records and the pair keys.
///
/// Expected: Ok(2), other event untouched
#[tokio::test]
async fn delete_by_event_removes_records_and_pairs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AttendanceRepository::new(db);
    repo.save(&record("attendance_1", "event_1", "user_1")).await?;
    repo.save(&record("attendance_2", "event_1", "user_2")).await?;
    repo.save(&record("attendance_3", "event_2", "user_1")).await?;

    assert_eq!(repo.delete_by_event("event_1").await?, 2);

    assert!(repo.get("attendance_1").await?.is_none());
    assert!(repo
        .find_by_event_and_player("event_1", "user_2")
        .await?
        .is_none());
    assert_eq!(repo.get_by_event("event_2").await?.len(), 1);

    Ok(())
}
