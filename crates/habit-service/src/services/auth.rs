//! Authentication service
//!
//! Registration, login, stateless token refresh, and resolving the bearer
//! of an access token.

use habit_common::auth::{hash_password, verify_password};
use habit_common::AppError;
use habit_core::entities::{normalize_email, User};
use habit_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        let email = normalize_email(&request.email);
        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password = request.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))??;

        let user = User::new(self.ctx.generate_id(), &request.name, &email);
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered");
        self.auth_response(&user)
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let email = normalize_email(&request.email);
        let Some(user) = self.ctx.user_repo().find_by_email(&email).await? else {
            warn!("Login failed: unknown email");
            return Err(AppError::InvalidCredentials.into());
        };

        let Some(password_hash) = self.ctx.user_repo().get_password_hash(user.id).await? else {
            warn!(user_id = %user.id, "Login failed: no password hash");
            return Err(AppError::InvalidCredentials.into());
        };

        let password = request.password;
        let is_valid =
            tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
                .await
                .map_err(|e| ServiceError::internal(e.to_string()))??;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::InvalidCredentials.into());
        }

        info!(user_id = %user.id, "User logged in");
        self.auth_response(&user)
    }

    /// Exchange a refresh token for a fresh pair. Nothing is stored, so the
    /// old refresh token stays valid until it expires.
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let user_id = self.ctx.jwt_service().verify_refresh(&request.refresh_token)?;
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        self.auth_response(&user)
    }

    /// Resolve an access token to a user that still exists
    pub async fn authenticate(&self, access_token: &str) -> ServiceResult<Snowflake> {
        let user_id = self.ctx.jwt_service().verify_access(access_token)?;
        match self.ctx.user_repo().find_by_id(user_id).await? {
            Some(user) => Ok(user.id),
            None => {
                warn!(user_id = %user_id, "Token for a user that no longer exists");
                Err(AppError::InvalidToken.into())
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn me(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;
        Ok(UserResponse::from(&user))
    }

    fn auth_response(&self, user: &User) -> ServiceResult<AuthResponse> {
        let pair = self.ctx.jwt_service().issue(user.id)?;
        Ok(AuthResponse {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: pair.token_type,
            expires_in: pair.expires_in,
            user: UserResponse::from(user),
        })
    }
}
