//! User model → entity

use habit_core::entities::{Role, User};
use habit_core::error::DomainError;
use habit_core::value_objects::Snowflake;

use crate::models::UserModel;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role: Role = model
            .role
            .parse()
            .map_err(|_| DomainError::DatabaseError(format!("bad role column: {}", model.role)))?;

        Ok(User {
            id: Snowflake::new(model.id),
            name: model.name,
            email: model.email,
            role,
            xp: model.xp,
            level: model.level,
            badges: model.badges,
            daily_spin_available: model.daily_spin_available,
            last_spin_date: model.last_spin_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
