//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Habit not found: {0}")]
    HabitNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not authorized to access this habit")]
    NotHabitOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Habit already logged for this date")]
    LogAlreadyExists,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Daily spin not available. Complete all habits first!")]
    SpinNotAvailable,

    #[error("Already spun today!")]
    AlreadySpunToday,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::HabitNotFound(_) => "UNKNOWN_HABIT",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidDate(_) => "INVALID_DATE",

            Self::NotHabitOwner => "NOT_HABIT_OWNER",

            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::LogAlreadyExists => "LOG_ALREADY_EXISTS",

            Self::SpinNotAvailable => "SPIN_NOT_AVAILABLE",
            Self::AlreadySpunToday => "ALREADY_SPUN_TODAY",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::HabitNotFound(_))
    }

    /// Bad input and rejected spins; both surface as 400
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidDate(_)
                | Self::SpinNotAvailable
                | Self::AlreadySpunToday
        )
    }

    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotHabitOwner)
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::LogAlreadyExists)
    }
}
