use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

use super::load_user;
use crate::{
    model::{attendance::AttendanceStatus, event::EventType},
    server::{
        data::{attendance::AttendanceRepository, event::EventRepository},
        error::AppError,
        model::{
            attendance::Attendance,
            event::{CreateEventParams, EventWindow, UpdateEventParams},
        },
        service::event::EventService,
    },
};

/// Tests upcoming and past windows split on today and order differently.
///
/// Expected: upcoming ascending, past descending, type filter applied
#[tokio::test]
async fn list_orders_by_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::user::create_user_with_role(db, "coach").await?;
    let team = factory::team::create_team(db, &coach.id).await?;
    for (title, days) in [("in-5", 5), ("ago-3", -3), ("today", 0), ("ago-10", -10), ("in-1", 1)] {
        factory::event::EventFactory::new(db, &team.id, &coach.id)
            .title(title)
            .days_from_today(days)
            .build()
            .await?;
    }
    factory::event::EventFactory::new(db, &team.id, &coach.id)
        .title("game")
        .event_type("game")
        .days_from_today(2)
        .build()
        .await?;

    let service = EventService::new(db);
    let today = Utc::now().date_naive();
    let titles = |events: Vec<crate::server::model::event::Event>| {
        events.into_iter().map(|e| e.title).collect::<Vec<_>>()
    };

    let upcoming = service
        .list(&team.id, EventWindow::Upcoming, Some(EventType::Practice), today)
        .await?;
    assert_eq!(titles(upcoming), vec!["today", "in-1", "in-5"]);

    let past = service.list(&team.id, EventWindow::Past, None, today).await?;
    assert_eq!(titles(past), vec!["ago-3", "ago-10"]);

    let games = service
        .list(&team.id, EventWindow::All, Some(EventType::Game), today)
        .await?;
    assert_eq!(titles(games), vec!["game"]);

    Ok(())
}

/// Tests create then update of an event.
///
/// Expected: event in the team index, score recorded by the update
#[tokio::test]
async fn create_and_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::user::create_user_with_role(db, "coach").await?;
    let team = factory::team::create_team(db, &seeded.id).await?;
    let coach = load_user(db, &seeded.id).await?;
    let service = EventService::new(db);

    let event = service
        .create(
            &coach,
            CreateEventParams {
                team_id: team.id.clone(),
                event_type: EventType::Game,
                title: "Derby".to_string(),
                date: Utc::now().date_naive(),
                time: "18:30".to_string(),
                location: "Stadium".to_string(),
                details: None,
                opponent: Some("Rivals".to_string()),
                home_score: None,
                away_score: None,
                is_home: Some(true),
            },
        )
        .await?;
    assert_eq!(
        EventRepository::new(db).get_by_team(&team.id).await?.len(),
        1
    );

    let updated = service
        .update(
            &event.id,
            UpdateEventParams {
                home_score: Some(2),
                away_score: Some(0),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.home_score, Some(2));
    assert_eq!(updated.title, "Derby");

    Ok(())
}

/// Tests deleting an event removes its index entry and attendance.
///
/// Expected: event, index entry and attendance gone
#[tokio::test]
async fn delete_cascades_attendance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::user::create_user_with_role(db, "coach").await?;
    let player = factory::user::create_user(db).await?;
    let team = factory::team::create_team(db, &coach.id).await?;
    let event_id = factory::event::EventFactory::new(db, &team.id, &coach.id)
        .build()
        .await?;

    let attendance = AttendanceRepository::new(db);
    attendance
        .save(&Attendance {
            id: "attendance_1".to_string(),
            event_id: event_id.clone(),
            user_id: player.id.clone(),
            indicated_status: Some(AttendanceStatus::Attend),
            indicated_at: None,
            indicated_by: None,
            actual_status: None,
            recorded_at: None,
            recorded_by: None,
        })
        .await?;

    EventService::new(db).delete(&event_id).await?;

    let events = EventRepository::new(db);
    assert!(events.get(&event_id).await?.is_none());
    assert!(events.get_by_team(&team.id).await?.is_empty());
    assert!(attendance.get_by_event(&event_id).await?.is_empty());
    assert!(attendance.get("attendance_1").await?.is_none());

    Ok(())
}
