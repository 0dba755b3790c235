use sea_orm::DatabaseConnection;

use crate::server::{
    data::{member::MemberRepository, user::UserRepository},
    error::AppError,
    model::{member::TeamMember, user::User},
};

mod event;
mod member;

/// Lowest cost bcrypt accepts; keeps hashing fast in tests.
const TEST_BCRYPT_COST: u32 = 4;

async fn load_user(db: &DatabaseConnection, user_id: &str) -> Result<User, AppError> {
    Ok(UserRepository::new(db)
        .get(user_id)
        .await?
        .expect("seeded user exists"))
}

async fn active_member(
    db: &DatabaseConnection,
    team_id: &str,
    user_id: &str,
) -> Result<TeamMember, AppError> {
    Ok(MemberRepository::new(db)
        .find_active(team_id, user_id)
        .await?
        .expect("seeded membership is active"))
}
