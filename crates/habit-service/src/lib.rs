//! # habit-service
//!
//! Application layer: use cases for accounts, habits, logs, progress reports,
//! and gamification, plus the request and response DTOs the API speaks.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, GamificationService, HabitService, LogService, ProgressService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
