//! JWT issuance and verification
//!
//! Access and refresh tokens share one HMAC secret and are told apart by the
//! `typ` claim. Refresh is stateless: a valid refresh token simply mints a
//! new pair.

use chrono::{Duration, Utc};
use habit_core::Snowflake;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(rename = "typ")]
    pub token_type: TokenType,
}

impl Claims {
    pub fn user_id(&self) -> Result<Snowflake, AppError> {
        self.sub.parse().map_err(|_| AppError::InvalidToken)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: i64,
    refresh_ttl: i64,
}

impl JwtService {
    /// `access_ttl` and `refresh_ttl` are in seconds
    pub fn new(secret: &str, access_ttl: i64, refresh_ttl: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn issue(&self, user_id: Snowflake) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.sign(user_id, TokenType::Access)?,
            refresh_token: self.sign(user_id, TokenType::Refresh)?,
            token_type: "Bearer".to_string(),
            expires_in: self.access_ttl,
        })
    }

    fn sign(&self, user_id: Snowflake, token_type: TokenType) -> Result<String, AppError> {
        let ttl = match token_type {
            TokenType::Access => self.access_ttl,
            TokenType::Refresh => self.refresh_ttl,
        };
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl)).timestamp(),
            token_type,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to sign token: {e}")))
    }

    fn verify(&self, token: &str, expected: TokenType) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default()).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            },
        )?;

        if data.claims.token_type != expected {
            return Err(AppError::InvalidToken);
        }
        Ok(data.claims)
    }

    /// Validate an access token and return the user it belongs to
    pub fn verify_access(&self, token: &str) -> Result<Snowflake, AppError> {
        self.verify(token, TokenType::Access)?.user_id()
    }

    pub fn verify_refresh(&self, token: &str) -> Result<Snowflake, AppError> {
        self.verify(token, TokenType::Refresh)?.user_id()
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}
