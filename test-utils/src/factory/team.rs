//! Team factory.
//!
//! Seeds a team the way team creation does: the team record, the code lookup key,
//! an active coach membership for the creator, and both index lists.

use sea_orm::{DatabaseConnection, DbErr};
use serde_json::json;

use crate::factory::{
    helpers::{next_id, now, put_json},
    member::MemberFactory,
};

/// Identity of a seeded team.
#[derive(Debug, Clone)]
pub struct SeededTeam {
    pub id: String,
    pub code: String,
    pub created_by: String,
    /// Membership id of the creator's coach membership.
    pub coach_member_id: String,
}

/// Factory for creating test teams.
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    created_by: String,
    name: String,
    code: String,
}

impl<'a> TeamFactory<'a> {
    /// Creates a factory for a team owned by `created_by`.
    ///
    /// Defaults:
    /// - name: `"Team {n}"`
    /// - code: 8 digits derived from the counter
    pub fn new(db: &'a DatabaseConnection, created_by: impl Into<String>) -> Self {
        let n = next_id();
        Self {
            db,
            created_by: created_by.into(),
            name: format!("Team {}", n),
            code: format!("{}", 10_000_000 + n),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Builds and stores the team with its coach membership.
    pub async fn build(self) -> Result<SeededTeam, DbErr> {
        let id = format!("team_{}", next_id());
        let record = json!({
            "id": id,
            "name": self.name,
            "code": self.code,
            "logoUrl": "",
            "color": "#3b82f6",
            "createdAt": now(),
            "createdBy": self.created_by,
        });
        put_json(self.db, &format!("team:{}", id), &record).await?;
        put_json(self.db, &format!("team:code:{}", self.code), &json!(id)).await?;

        let coach_member_id = MemberFactory::new(self.db, &id, &self.created_by)
            .role("coach")
            .build()
            .await?;

        Ok(SeededTeam {
            id,
            code: self.code,
            created_by: self.created_by,
            coach_member_id,
        })
    }
}

/// Creates a team owned by `created_by` with default values.
pub async fn create_team(db: &DatabaseConnection, created_by: &str) -> Result<SeededTeam, DbErr> {
    TeamFactory::new(db, created_by).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::TestBuilder,
        factory::{helpers::read_index, user::create_user_with_role},
    };

    #[tokio::test]
    async fn creates_team_with_coach_membership() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_kv_store().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let coach = create_user_with_role(db, "coach").await?;
        let team = create_team(db, &coach.id).await?;

        assert_eq!(team.code.len(), 8);
        assert_eq!(
            read_index(db, &format!("team:{}:members", team.id)).await?,
            vec![team.coach_member_id.clone()]
        );
        assert_eq!(
            read_index(db, &format!("user:{}:teams", coach.id)).await?,
            vec![team.id.clone()]
        );

        Ok(())
    }
}
