//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use habit_core::entities::User;
use habit_core::error::DomainError;
use habit_core::traits::{RepoResult, UserRepository};
use habit_core::value_objects::Snowflake;

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let row = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, role, xp, level, badges, daily_spin_available,
                   last_spin_date, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let row = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, role, xp, level, badges, daily_spin_available,
                   last_spin_date, created_at, updated_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, user, password_hash), fields(user_id = %user.id))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, name, email, password_hash, role, xp, level, badges,
                               daily_spin_available, last_spin_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.name)
        .bind(&user.email)
        .bind(password_hash)
        .bind(user.role.as_str())
        .bind(user.xp)
        .bind(user.level)
        .bind(&user.badges)
        .bind(user.daily_spin_available)
        .bind(user.last_spin_date)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, previous, user), fields(user_id = %user.id))]
    async fn update_gamification(&self, previous: &User, user: &User) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET xp = $2, level = $3, badges = $4, daily_spin_available = $5,
                last_spin_date = $6, updated_at = NOW()
            WHERE id = $1
              AND xp = $7
              AND badges = $8
              AND daily_spin_available = $9
              AND last_spin_date IS NOT DISTINCT FROM $10
            ",
        )
        .bind(user.id.into_inner())
        .bind(user.xp)
        .bind(user.level)
        .bind(&user.badges)
        .bind(user.daily_spin_available)
        .bind(user.last_spin_date)
        .bind(previous.xp)
        .bind(&previous.badges)
        .bind(previous.daily_spin_available)
        .bind(previous.last_spin_date)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }

        // Zero rows: either the user is gone or the snapshot is stale
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(user.id.into_inner())
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;
        if exists {
            Ok(false)
        } else {
            Err(DomainError::UserNotFound(user.id))
        }
    }
}
