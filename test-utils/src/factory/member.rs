//! Team membership factory.

use sea_orm::{DatabaseConnection, DbErr};
use serde_json::{json, Value};

use crate::factory::helpers::{next_id, now, push_index, put_json};

/// Factory for creating memberships.
///
/// The member id is appended to `team:<id>:members`. Only active memberships add the
/// team to `user:<id>:teams`, matching join approval.
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: String,
    user_id: String,
    role: String,
    status: String,
    player_info: Value,
    parent_info: Value,
}

impl<'a> MemberFactory<'a> {
    /// Defaults: role `"player"`, status `"active"`, no player or parent info.
    pub fn new(
        db: &'a DatabaseConnection,
        team_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            team_id: team_id.into(),
            user_id: user_id.into(),
            role: "player".to_string(),
            status: "active".to_string(),
            player_info: Value::Null,
            parent_info: Value::Null,
        }
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the player position and jersey number.
    pub fn player_info(mut self, position: &str, jersey_number: u32) -> Self {
        self.player_info = json!({ "position": position, "jerseyNumber": jersey_number });
        self
    }

    /// Links a parent membership to the given player user ids.
    pub fn children(mut self, children_ids: &[&str]) -> Self {
        self.parent_info = json!({ "childrenIds": children_ids });
        self
    }

    /// Builds and stores the membership, returning its id.
    pub async fn build(self) -> Result<String, DbErr> {
        let id = format!("member_{}", next_id());
        let record = json!({
            "id": id,
            "teamId": self.team_id,
            "userId": self.user_id,
            "role": self.role,
            "status": self.status,
            "joinedAt": now(),
            "notes": "",
            "playerInfo": self.player_info,
            "parentInfo": self.parent_info,
        });
        put_json(self.db, &format!("member:{}", id), &record).await?;
        push_index(self.db, &format!("team:{}:members", self.team_id), &id).await?;

        if self.status == "active" {
            push_index(self.db, &format!("user:{}:teams", self.user_id), &self.team_id).await?;
        }

        Ok(id)
    }
}

/// Adds an active membership with the given role, returning the member id.
pub async fn add_member(
    db: &DatabaseConnection,
    team_id: &str,
    user_id: &str,
    role: &str,
) -> Result<String, DbErr> {
    MemberFactory::new(db, team_id, user_id).role(role).build().await
}
