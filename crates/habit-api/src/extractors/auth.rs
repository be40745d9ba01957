//! Authentication extractor
//!
//! Reads the bearer token, verifies it, and checks that its user still exists.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use habit_core::Snowflake;
use habit_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// The user behind a valid access token
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Snowflake,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let user_id = AuthService::new(app_state.service_context())
            .authenticate(bearer.token())
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected access token");
                ApiError::from(e)
            })?;

        Ok(AuthUser { user_id })
    }
}
