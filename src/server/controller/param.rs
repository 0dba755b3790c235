//! Query string parameters shared by list endpoints.

use serde::Deserialize;

use crate::{
    model::{event::EventType, member::MemberStatus, user::UserRole},
    server::model::event::EventWindow,
};

#[derive(Debug, Default, Deserialize)]
pub struct MemberListQuery {
    pub role: Option<UserRole>,
    pub status: Option<MemberStatus>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MessageListQuery {
    /// Case-insensitive search text.
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EventListQuery {
    #[serde(default)]
    pub when: EventWindow,
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
}
