//! Business logic services
//!
//! Each service borrows a [`ServiceContext`] for the duration of one request
//! and talks to storage only through the repository traits.

pub mod auth;
pub mod context;
pub mod error;
pub mod gamification;
pub mod habit;
pub mod log;
pub mod progress;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use gamification::GamificationService;
pub use habit::HabitService;
pub use log::LogService;
pub use progress::ProgressService;
