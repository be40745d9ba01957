//! Path parameter extractor for Snowflake IDs

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use habit_core::Snowflake;

use crate::response::ApiError;

/// Single ID segment such as `/habits/:id`. A malformed ID is a 400.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub Snowflake);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        raw.parse::<Snowflake>()
            .map(IdPath)
            .map_err(|_| ApiError::invalid_path(format!("Invalid ID: {raw}")))
    }
}
