//! Event domain model, ordering and parameters.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    model::event::{CreateEventDto, EventDto, EventType, UpdateEventDto},
    server::{error::AppError, util::validate},
};

/// Event stored under `event:<id>` and listed in `team:<teamId>:events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub team_id: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub title: String,
    pub date: NaiveDate,
    /// `HH:MM`, zero padded so it orders lexically.
    pub time: String,
    pub location: String,
    pub details: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub opponent: Option<String>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub is_home: Option<bool>,
}

/// Outcome of a scored game from the team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Loss,
    Tie,
}

impl Event {
    /// Returns the outcome when this is a game with both scores recorded.
    ///
    /// The team's score is the home score when `is_home` is true, the away score otherwise.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.event_type != EventType::Game {
            return None;
        }
        let (home, away) = (self.home_score?, self.away_score?);
        let (ours, theirs) = if self.is_home.unwrap_or(false) {
            (home, away)
        } else {
            (away, home)
        };

        Some(match ours.cmp(&theirs) {
            Ordering::Greater => GameOutcome::Win,
            Ordering::Less => GameOutcome::Loss,
            Ordering::Equal => GameOutcome::Tie,
        })
    }

    /// Chronological order by date, then time.
    pub fn chronological(a: &Event, b: &Event) -> Ordering {
        a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time))
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            team_id: self.team_id,
            event_type: self.event_type,
            title: self.title,
            date: self.date,
            time: self.time,
            location: self.location,
            details: self.details,
            created_by: self.created_by,
            created_at: self.created_at,
            opponent: self.opponent,
            home_score: self.home_score,
            away_score: self.away_score,
            is_home: self.is_home,
        }
    }
}

/// Which part of the schedule to list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventWindow {
    /// Today and later, soonest first.
    Upcoming,
    /// Before today, most recent first.
    Past,
    /// Everything in chronological order.
    #[default]
    All,
}

impl EventWindow {
    /// Keeps the events inside the window and sorts them for display.
    pub fn select(self, mut events: Vec<Event>, today: NaiveDate) -> Vec<Event> {
        match self {
            EventWindow::Upcoming => {
                events.retain(|e| e.date >= today);
                events.sort_by(Event::chronological);
            }
            EventWindow::Past => {
                events.retain(|e| e.date < today);
                events.sort_by(|a, b| Event::chronological(b, a));
            }
            EventWindow::All => events.sort_by(Event::chronological),
        }
        events
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub team_id: String,
    pub event_type: EventType,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub details: Option<String>,
    pub opponent: Option<String>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub is_home: Option<bool>,
}

impl CreateEventParams {
    pub fn from_dto(dto: CreateEventDto) -> Result<Self, AppError> {
        Ok(Self {
            team_id: dto.team_id,
            event_type: dto.event_type,
            title: validate::required("title", &dto.title)?,
            date: validate::date(&dto.date)?,
            time: validate::time(&dto.time)?,
            location: validate::required("location", &dto.location)?,
            details: non_empty(dto.details),
            opponent: non_empty(dto.opponent),
            home_score: dto.home_score,
            away_score: dto.away_score,
            is_home: dto.is_home,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEventParams {
    pub event_type: Option<EventType>,
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub details: Option<String>,
    pub opponent: Option<String>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub is_home: Option<bool>,
}

impl UpdateEventParams {
    pub fn from_dto(dto: UpdateEventDto) -> Result<Self, AppError> {
        Ok(Self {
            event_type: dto.event_type,
            title: dto
                .title
                .map(|v| validate::required("title", &v))
                .transpose()?,
            date: dto.date.map(|v| validate::date(&v)).transpose()?,
            time: dto.time.map(|v| validate::time(&v)).transpose()?,
            location: dto
                .location
                .map(|v| validate::required("location", &v))
                .transpose()?,
            details: dto.details,
            opponent: dto.opponent,
            home_score: dto.home_score,
            away_score: dto.away_score,
            is_home: dto.is_home,
        })
    }

    pub fn apply(self, event: &mut Event) {
        if let Some(event_type) = self.event_type {
            event.event_type = event_type;
        }
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(time) = self.time {
            event.time = time;
        }
        if let Some(location) = self.location {
            event.location = location;
        }
        if let Some(details) = self.details {
            event.details = non_empty(Some(details));
        }
        if let Some(opponent) = self.opponent {
            event.opponent = non_empty(Some(opponent));
        }
        if self.home_score.is_some() {
            event.home_score = self.home_score;
        }
        if self.away_score.is_some() {
            event.away_score = self.away_score;
        }
        if self.is_home.is_some() {
            event.is_home = self.is_home;
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, date: &str, time: &str) -> Event {
        Event {
            id: id.to_string(),
            team_id: "team_1".to_string(),
            event_type: EventType::Practice,
            title: id.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time: time.to_string(),
            location: "Main Gym".to_string(),
            details: None,
            created_by: "coach".to_string(),
            created_at: Utc::now(),
            opponent: None,
            home_score: None,
            away_score: None,
            is_home: None,
        }
    }

    fn game(is_home: bool, home: Option<u32>, away: Option<u32>) -> Event {
        let mut e = event("game", "2026-03-01", "10:00");
        e.event_type = EventType::Game;
        e.is_home = Some(is_home);
        e.home_score = home;
        e.away_score = away;
        e
    }

    fn ids(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn upcoming_includes_today_in_ascending_order() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let events = vec![
            event("later", "2026-03-20", "09:00"),
            event("yesterday", "2026-03-09", "09:00"),
            event("today-late", "2026-03-10", "18:00"),
            event("today-early", "2026-03-10", "08:00"),
        ];

        let selected = EventWindow::Upcoming.select(events, today);
        assert_eq!(ids(&selected), vec!["today-early", "today-late", "later"]);
    }

    #[test]
    fn past_is_most_recent_first() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let events = vec![
            event("old", "2026-01-01", "09:00"),
            event("today", "2026-03-10", "09:00"),
            event("recent", "2026-03-05", "09:00"),
        ];

        let selected = EventWindow::Past.select(events, today);
        assert_eq!(ids(&selected), vec!["recent", "old"]);
    }

    #[test]
    fn outcome_uses_home_flag() {
        assert_eq!(game(true, Some(3), Some(1)).outcome(), Some(GameOutcome::Win));
        assert_eq!(game(false, Some(3), Some(1)).outcome(), Some(GameOutcome::Loss));
        assert_eq!(game(false, Some(2), Some(2)).outcome(), Some(GameOutcome::Tie));
        assert_eq!(game(true, Some(2), None).outcome(), None);
        assert_eq!(event("practice", "2026-03-01", "10:00").outcome(), None);
    }

    #[test]
    fn rejects_malformed_date() {
        let dto = CreateEventDto {
            team_id: "team_1".to_string(),
            event_type: EventType::Practice,
            title: "Practice".to_string(),
            date: "03/10/2026".to_string(),
            time: "16:00".to_string(),
            location: "Main Gym".to_string(),
            details: None,
            opponent: None,
            home_score: None,
            away_score: None,
            is_home: None,
        };
        assert!(CreateEventParams::from_dto(dto).is_err());
    }
}
