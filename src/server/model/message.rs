//! Message domain model, visibility rules and parameters.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::{
        message::{MessageDto, MessageThreadDto, RecipientType, SendMessageDto},
        user::UserRole,
    },
    server::{error::AppError, model::member::TeamMember, util::validate},
};

/// Message stored under `message:<id>`; its id is prepended to `team:<teamId>:messages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub team_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub sender_role: UserRole,
    pub subject: String,
    pub body: String,
    pub recipient_type: RecipientType,
    #[serde(default)]
    pub recipient_ids: Vec<String>,
    #[serde(default)]
    pub forward_to_parent: bool,
    pub created_at: DateTime<Utc>,
    pub reply_to_id: Option<String>,
}

impl Message {
    /// Whether the viewer's membership may read this message.
    ///
    /// Coaches read everything. Everyone else reads their own messages, broadcasts, messages
    /// to their role group and individual messages naming them. Parents additionally read
    /// messages forwarded to parents that target players or name one of their children.
    pub fn is_visible_to(&self, viewer: &TeamMember) -> bool {
        if viewer.role == UserRole::Coach || self.sender_id == viewer.user_id {
            return true;
        }

        let addressed = match self.recipient_type {
            RecipientType::Everyone => true,
            RecipientType::Players => viewer.role == UserRole::Player,
            RecipientType::Parents => viewer.role == UserRole::Parent,
            RecipientType::Coaches => false,
            RecipientType::Individual => self.recipient_ids.contains(&viewer.user_id),
        };
        if addressed {
            return true;
        }

        viewer.role == UserRole::Parent
            && self.forward_to_parent
            && (self.recipient_type == RecipientType::Players
                || self
                    .recipient_ids
                    .iter()
                    .any(|player_id| viewer.is_parent_of(player_id)))
    }

    /// Case-insensitive substring match over subject, sender name and body.
    ///
    /// `query` must already be lowercased.
    pub fn matches_query(&self, query: &str) -> bool {
        query.is_empty()
            || self.subject.to_lowercase().contains(query)
            || self.sender_name.to_lowercase().contains(query)
            || self.body.to_lowercase().contains(query)
    }

    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            team_id: self.team_id,
            sender_id: self.sender_id,
            sender_name: self.sender_name,
            sender_role: self.sender_role,
            subject: self.subject,
            body: self.body,
            recipient_type: self.recipient_type,
            recipient_ids: self.recipient_ids,
            forward_to_parent: self.forward_to_parent,
            created_at: self.created_at,
            reply_to_id: self.reply_to_id,
        }
    }
}

/// Recipient types a member with `role` may address.
pub fn allowed_recipient_types(role: UserRole) -> &'static [RecipientType] {
    match role {
        UserRole::Coach => &[
            RecipientType::Everyone,
            RecipientType::Players,
            RecipientType::Parents,
            RecipientType::Coaches,
            RecipientType::Individual,
        ],
        UserRole::Player => &[RecipientType::Everyone, RecipientType::Coaches],
        UserRole::Parent => &[
            RecipientType::Everyone,
            RecipientType::Coaches,
            RecipientType::Parents,
        ],
    }
}

/// A message with its replies, oldest reply first.
#[derive(Debug, Clone)]
pub struct MessageThread {
    pub message: Message,
    pub replies: Vec<Message>,
}

impl MessageThread {
    pub fn into_dto(self) -> MessageThreadDto {
        MessageThreadDto {
            message: self.message.into_dto(),
            replies: self.replies.into_iter().map(Message::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SendMessageParams {
    pub team_id: String,
    pub subject: String,
    pub body: String,
    pub recipient_type: RecipientType,
    pub recipient_ids: Vec<String>,
    pub forward_to_parent: bool,
    pub reply_to_id: Option<String>,
}

impl SendMessageParams {
    /// Validates a send-message DTO.
    ///
    /// # Returns
    /// - `Ok(SendMessageParams)` - Subject and body trimmed, recipient ids deduplicated
    /// - `Err(AppError::BadRequest)` - Empty subject or body, or an individual message
    ///   without recipients
    pub fn from_dto(dto: SendMessageDto) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        let mut recipient_ids = dto.recipient_ids.unwrap_or_default();
        recipient_ids.retain(|id| !id.trim().is_empty() && seen.insert(id.clone()));

        if dto.recipient_type == RecipientType::Individual && recipient_ids.is_empty() {
            return Err(AppError::BadRequest(
                "Individual messages need at least one recipient".to_string(),
            ));
        }

        Ok(Self {
            team_id: dto.team_id,
            subject: validate::required("subject", &dto.subject)?,
            body: validate::required("body", &dto.body)?,
            recipient_type: dto.recipient_type,
            recipient_ids,
            forward_to_parent: dto.forward_to_parent.unwrap_or(false),
            reply_to_id: dto.reply_to_id.filter(|id| !id.trim().is_empty()),
        })
    }
}
