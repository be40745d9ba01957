//! User entity - account identity plus gamification state

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::gamification::{level_for_xp, xp_to_next_level, SpinReward, LUCKY_BADGE, MAX_XP_AWARD};
use crate::value_objects::Snowflake;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(DomainError::ValidationError(format!("unknown role: {other}"))),
        }
    }
}

/// Canonical form used for lookups and the unique index
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub xp: i64,
    pub level: i64,
    pub badges: Vec<String>,
    pub daily_spin_available: bool,
    pub last_spin_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a fresh account with zero XP at level 1
    pub fn new(id: Snowflake, name: &str, email: &str) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.trim().to_string(),
            email: normalize_email(email),
            role: Role::User,
            xp: 0,
            level: level_for_xp(0),
            badges: Vec::new(),
            daily_spin_available: false,
            last_spin_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn xp_to_next_level(&self) -> i64 {
        xp_to_next_level(self.xp)
    }

    pub fn has_badge(&self, badge: &str) -> bool {
        self.badges.iter().any(|b| b == badge)
    }

    /// Add XP and recompute the level. XP never decreases.
    pub fn award_xp(&mut self, amount: i64) -> Result<(), DomainError> {
        if !(1..=MAX_XP_AWARD).contains(&amount) {
            return Err(DomainError::ValidationError(format!(
                "XP amount must be between 1 and {MAX_XP_AWARD}"
            )));
        }
        self.xp = self.xp.saturating_add(amount);
        self.level = level_for_xp(self.xp);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Append a badge. Returns `false` when the user already owns it.
    pub fn award_badge(&mut self, badge: &str) -> bool {
        if self.has_badge(badge) {
            return false;
        }
        self.badges.push(badge.to_string());
        self.updated_at = Utc::now();
        true
    }

    pub fn enable_daily_spin(&mut self) {
        self.daily_spin_available = true;
        self.updated_at = Utc::now();
    }

    /// Reject the spin unless it is both unlocked and the first one today
    pub fn ensure_can_spin(&self, today: NaiveDate) -> Result<(), DomainError> {
        if self.last_spin_date == Some(today) {
            return Err(DomainError::AlreadySpunToday);
        }
        if !self.daily_spin_available {
            return Err(DomainError::SpinNotAvailable);
        }
        Ok(())
    }

    /// Apply a drawn reward and consume today's spin
    pub fn spin(&mut self, today: NaiveDate, reward: SpinReward) -> Result<(), DomainError> {
        self.ensure_can_spin(today)?;

        match reward {
            SpinReward::Xp { amount, .. } => self.award_xp(amount)?,
            SpinReward::Badge { .. } => {
                self.award_badge(LUCKY_BADGE);
            }
            // No effect yet; kept so the draw stays uniform over five outcomes.
            SpinReward::StreakProtection { .. } => {}
        }

        self.daily_spin_available = false;
        self.last_spin_date = Some(today);
        self.updated_at = Utc::now();
        Ok(())
    }
}
