//! Team messaging: sending with role-based addressing rules, visibility-filtered listing and
//! reply threads.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::message::MessageRepository,
    error::{auth::AuthError, AppError},
    model::{
        member::TeamMember,
        message::{allowed_recipient_types, Message, MessageThread, SendMessageParams},
        user::User,
    },
    util::id,
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a message to the team.
    ///
    /// # Arguments
    /// - `sender` - Profile of the sender, for the denormalized sender name
    /// - `membership` - Sender's active membership of the target team
    /// - `params` - Validated message fields
    ///
    /// # Returns
    /// - `Ok(Message)` - Stored message, now first in the team index
    /// - `Err(AppError::AuthErr(AccessDenied))` - Sender's role may not use the recipient type
    /// - `Err(AppError::BadRequest)` - `reply_to_id` is not a message of this team
    pub async fn send(
        &self,
        sender: &User,
        membership: &TeamMember,
        params: SendMessageParams,
    ) -> Result<Message, AppError> {
        if !allowed_recipient_types(membership.role).contains(&params.recipient_type) {
            return Err(AuthError::AccessDenied(
                sender.id.clone(),
                format!(
                    "A {:?} may not send {:?} messages",
                    membership.role, params.recipient_type
                )
                .to_lowercase(),
            )
            .into());
        }

        let tx = self.db.begin().await?;
        let messages = MessageRepository::new(&tx);

        if let Some(parent_id) = &params.reply_to_id {
            let parent = messages.get(parent_id).await?;
            if parent.is_none_or(|p| p.team_id != membership.team_id) {
                return Err(AppError::BadRequest(
                    "replyToId must refer to a message of the same team".to_string(),
                ));
            }
        }

        let message = Message {
            id: id::new_id("message"),
            team_id: membership.team_id.clone(),
            sender_id: sender.id.clone(),
            sender_name: sender.full_name(),
            sender_role: membership.role,
            subject: params.subject,
            body: params.body,
            recipient_type: params.recipient_type,
            recipient_ids: params.recipient_ids,
            forward_to_parent: params.forward_to_parent,
            created_at: Utc::now(),
            reply_to_id: params.reply_to_id,
        };
        messages.save(&message).await?;
        messages.add_to_team(&message.team_id, &message.id).await?;
        tx.commit().await?;

        Ok(message)
    }

    /// Messages of the viewer's team that the viewer may read, newest first.
    ///
    /// # Arguments
    /// - `viewer` - Caller's active membership of the team
    /// - `query` - Optional case-insensitive search over subject, sender name and body
    pub async fn list(
        &self,
        viewer: &TeamMember,
        query: Option<&str>,
    ) -> Result<Vec<Message>, AppError> {
        let query = query.unwrap_or_default().trim().to_lowercase();

        Ok(MessageRepository::new(self.db)
            .get_by_team(&viewer.team_id)
            .await?
            .into_iter()
            .filter(|m| m.is_visible_to(viewer) && m.matches_query(&query))
            .collect())
    }

    /// Loads a message.
    ///
    /// # Returns
    /// - `Ok(Message)` - Message exists
    /// - `Err(AppError::NotFound)` - No message with that id
    pub async fn get(&self, message_id: &str) -> Result<Message, AppError> {
        MessageRepository::new(self.db)
            .get(message_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Message not found".to_string()))
    }

    /// A message and its visible replies, oldest reply first.
    ///
    /// # Returns
    /// - `Ok(MessageThread)` - Thread
    /// - `Err(AppError::AuthErr(AccessDenied))` - The viewer may not read the message
    pub async fn thread(
        &self,
        viewer: &TeamMember,
        message: Message,
    ) -> Result<MessageThread, AppError> {
        if !message.is_visible_to(viewer) {
            return Err(AuthError::AccessDenied(
                viewer.user_id.clone(),
                "You cannot view this message".to_string(),
            )
            .into());
        }

        let mut replies: Vec<Message> = MessageRepository::new(self.db)
            .get_by_team(&message.team_id)
            .await?
            .into_iter()
            .filter(|m| m.reply_to_id.as_deref() == Some(message.id.as_str()))
            .filter(|m| m.is_visible_to(viewer))
            .collect();
        // The index is newest first; reverse so equal timestamps keep send order.
        replies.reverse();
        replies.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        Ok(MessageThread { message, replies })
    }
}
