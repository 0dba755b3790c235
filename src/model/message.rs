use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecipientType {
    Everyone,
    Players,
    Parents,
    Coaches,
    Individual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: String,
    pub team_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub sender_role: UserRole,
    pub subject: String,
    pub body: String,
    pub recipient_type: RecipientType,
    pub recipient_ids: Vec<String>,
    pub forward_to_parent: bool,
    pub created_at: DateTime<Utc>,
    pub reply_to_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageDto {
    pub team_id: String,
    pub subject: String,
    pub body: String,
    pub recipient_type: RecipientType,
    pub recipient_ids: Option<Vec<String>>,
    pub forward_to_parent: Option<bool>,
    pub reply_to_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageThreadDto {
    pub message: MessageDto,
    pub replies: Vec<MessageDto>,
}
