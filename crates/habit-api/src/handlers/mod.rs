//! Route handlers, one module per resource

pub mod auth;
pub mod gamification;
pub mod habits;
pub mod health;
pub mod logs;
pub mod progress;
