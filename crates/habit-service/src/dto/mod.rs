//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers from domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    AwardBadgeRequest, AwardXpRequest, CalendarQuery, CreateHabitRequest, CreateLogRequest,
    LoginRequest, RefreshTokenRequest, RegisterRequest, UpdateHabitRequest,
};

pub use responses::{
    ApiInfoResponse, AuthResponse, AwardBadgeResponse, AwardXpResponse, CalendarResponse,
    EnableSpinResponse, HabitLogResponse, HabitProgressResponse, HabitResponse, HealthChecks,
    HealthResponse, LogCreatedResponse, MessageResponse, ReadinessResponse, SpinResponse,
    StatsResponse, UserResponse,
};
