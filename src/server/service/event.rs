//! Schedule workflows for team events.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::event::EventType,
    server::{
        data::{attendance::AttendanceRepository, event::EventRepository},
        error::AppError,
        model::{
            event::{CreateEventParams, Event, EventWindow, UpdateEventParams},
            user::User,
        },
        util::id,
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules an event and appends it to the team index.
    pub async fn create(&self, creator: &User, params: CreateEventParams) -> Result<Event, AppError> {
        let event = Event {
            id: id::new_id("event"),
            team_id: params.team_id,
            event_type: params.event_type,
            title: params.title,
            date: params.date,
            time: params.time,
            location: params.location,
            details: params.details,
            created_by: creator.id.clone(),
            created_at: chrono::Utc::now(),
            opponent: params.opponent,
            home_score: params.home_score,
            away_score: params.away_score,
            is_home: params.is_home,
        };

        let tx = self.db.begin().await?;
        let events = EventRepository::new(&tx);
        events.save(&event).await?;
        events.add_to_team(&event.team_id, &event.id).await?;
        tx.commit().await?;

        Ok(event)
    }

    /// Loads an event.
    ///
    /// # Returns
    /// - `Ok(Event)` - Event exists
    /// - `Err(AppError::NotFound)` - No event with that id
    pub async fn get(&self, event_id: &str) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .get(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    /// Lists the team's events inside a window of the schedule.
    ///
    /// # Arguments
    /// - `team_id` - Team to list
    /// - `window` - Upcoming, past or all events, which also decides the ordering
    /// - `event_type` - Optional type filter
    /// - `today` - Date splitting upcoming from past
    pub async fn list(
        &self,
        team_id: &str,
        window: EventWindow,
        event_type: Option<EventType>,
        today: NaiveDate,
    ) -> Result<Vec<Event>, AppError> {
        let mut events = EventRepository::new(self.db).get_by_team(team_id).await?;
        if let Some(event_type) = event_type {
            events.retain(|e| e.event_type == event_type);
        }

        Ok(window.select(events, today))
    }

    pub async fn update(&self, event_id: &str, params: UpdateEventParams) -> Result<Event, AppError> {
        let mut event = self.get(event_id).await?;
        params.apply(&mut event);
        EventRepository::new(self.db).save(&event).await?;

        Ok(event)
    }

    /// Deletes an event with its attendance records.
    ///
    /// # Returns
    /// - `Ok(())` - Event, index entry and attendance removed
    /// - `Err(AppError::NotFound)` - No event with that id
    pub async fn delete(&self, event_id: &str) -> Result<(), AppError> {
        let event = self.get(event_id).await?;

        let tx = self.db.begin().await?;
        let events = EventRepository::new(&tx);
        events.remove_from_team(&event.team_id, &event.id).await?;
        let removed = AttendanceRepository::new(&tx)
            .delete_by_event(&event.id)
            .await?;
        events.delete(&event.id).await?;
        tx.commit().await?;

        tracing::info!(
            "Deleted event {} of team {} with {} attendance records",
            event.id,
            event.team_id,
            removed
        );

        Ok(())
    }
}
