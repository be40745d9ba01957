//! User database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Row of the `users` table, without the password hash
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub xp: i64,
    pub level: i64,
    pub badges: Vec<String>,
    pub daily_spin_available: bool,
    pub last_spin_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
