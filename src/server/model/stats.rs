//! Team and player statistics derived from events, memberships and attendance.

use crate::{
    model::{
        event::EventType,
        team::{PlayerStatsDto, TeamStatsDto},
        user::UserRole,
    },
    server::model::{
        attendance::Attendance,
        event::{Event, GameOutcome},
        member::TeamMember,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct TeamStats {
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    /// Percentage of games won, one decimal.
    pub win_rate: f64,
    pub total_players: u32,
    pub active_players: u32,
}

impl TeamStats {
    /// Computes stats from the team's events and memberships.
    ///
    /// Only games with both scores recorded count. Ties count toward the total but are
    /// neither a win nor a loss.
    pub fn compute(events: &[Event], members: &[TeamMember]) -> Self {
        let outcomes: Vec<GameOutcome> = events.iter().filter_map(Event::outcome).collect();
        let total_games = outcomes.len() as u32;
        let wins = outcomes.iter().filter(|o| **o == GameOutcome::Win).count() as u32;
        let losses = outcomes.iter().filter(|o| **o == GameOutcome::Loss).count() as u32;

        let players = members.iter().filter(|m| m.role == UserRole::Player);
        let total_players = players.clone().count() as u32;
        let active_players = players.filter(|m| m.is_active()).count() as u32;

        Self {
            total_games,
            wins,
            losses,
            win_rate: percentage(wins, total_games),
            total_players,
            active_players,
        }
    }

    pub fn into_dto(self) -> TeamStatsDto {
        TeamStatsDto {
            total_games: self.total_games,
            wins: self.wins,
            losses: self.losses,
            win_rate: self.win_rate,
            total_players: self.total_players,
            active_players: self.active_players,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub player_id: String,
    /// Games with a recorded attend or late status.
    pub games_played: u32,
    /// Events with any recorded status.
    pub events_recorded: u32,
    pub attendance_rate: f64,
}

impl PlayerStats {
    /// Computes stats from `(event, attendance)` pairs belonging to one player.
    pub fn compute(player_id: &str, records: &[(Event, Attendance)]) -> Self {
        let recorded: Vec<&(Event, Attendance)> = records
            .iter()
            .filter(|(_, a)| a.actual_status.is_some())
            .collect();
        let attended = recorded.iter().filter(|(_, a)| a.attended()).count() as u32;
        let games_played = recorded
            .iter()
            .filter(|(e, a)| e.event_type == EventType::Game && a.attended())
            .count() as u32;
        let events_recorded = recorded.len() as u32;

        Self {
            player_id: player_id.to_string(),
            games_played,
            events_recorded,
            attendance_rate: percentage(attended, events_recorded),
        }
    }

    pub fn into_dto(self) -> PlayerStatsDto {
        PlayerStatsDto {
            player_id: self.player_id,
            games_played: self.games_played,
            events_recorded: self.events_recorded,
            attendance_rate: self.attendance_rate,
        }
    }
}

/// `part / whole` as a percentage rounded to one decimal, 0 when `whole` is 0.
fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (f64::from(part) * 1000.0 / f64::from(whole)).round() / 10.0
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;
    use crate::model::{attendance::AttendanceStatus, member::MemberStatus};

    fn game(id: &str, is_home: bool, home: Option<u32>, away: Option<u32>) -> Event {
        Event {
            id: id.to_string(),
            team_id: "team_1".to_string(),
            event_type: EventType::Game,
            title: id.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            time: "10:00".to_string(),
            location: "Field".to_string(),
            details: None,
            created_by: "coach".to_string(),
            created_at: Utc::now(),
            opponent: Some("Rivals".to_string()),
            home_score: home,
            away_score: away,
            is_home: Some(is_home),
        }
    }

    fn player(status: MemberStatus) -> TeamMember {
        TeamMember {
            id: "member".to_string(),
            team_id: "team_1".to_string(),
            user_id: "user".to_string(),
            role: UserRole::Player,
            status,
            joined_at: None,
            notes: String::new(),
            player_info: None,
            parent_info: None,
        }
    }

    fn attendance(event_id: &str, actual: Option<AttendanceStatus>) -> Attendance {
        Attendance {
            id: format!("attendance_{}", event_id),
            event_id: event_id.to_string(),
            user_id: "user".to_string(),
            indicated_status: None,
            indicated_at: None,
            indicated_by: None,
            actual_status: actual,
            recorded_at: None,
            recorded_by: None,
        }
    }

    #[test]
    fn counts_wins_losses_and_ties() {
        let events = vec![
            game("home-win", true, Some(3), Some(1)),
            game("away-win", false, Some(0), Some(2)),
            game("away-loss", false, Some(4), Some(1)),
            game("tie", true, Some(1), Some(1)),
            game("unscored", true, None, None),
        ];
        let members = vec![
            player(MemberStatus::Active),
            player(MemberStatus::Active),
            player(MemberStatus::Pending),
        ];

        let stats = TeamStats::compute(&events, &members);

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.win_rate, 50.0);
        assert_eq!(stats.total_players, 3);
        assert_eq!(stats.active_players, 2);
    }

    #[test]
    fn win_rate_is_zero_without_games() {
        let stats = TeamStats::compute(&[], &[]);
        assert_eq!(stats.win_rate, 0.0);
    }

    #[test]
    fn win_rate_rounds_to_one_decimal() {
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 3), 66.7);
    }

    #[test]
    fn player_stats_only_count_recorded_events() {
        let mut practice = game("practice", true, None, None);
        practice.event_type = EventType::Practice;
        let records = vec![
            (
                game("g1", true, Some(1), Some(0)),
                attendance("g1", Some(AttendanceStatus::Attend)),
            ),
            (
                game("g2", true, Some(1), Some(0)),
                attendance("g2", Some(AttendanceStatus::Absent)),
            ),
            (
                practice.clone(),
                attendance("practice", Some(AttendanceStatus::Late)),
            ),
            (game("g3", true, None, None), attendance("g3", None)),
        ];

        let stats = PlayerStats::compute("user", &records);

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.events_recorded, 3);
        assert_eq!(stats.attendance_rate, 66.7);
    }
}
