use chrono::{Duration, Utc};
use entity::user::{Model as UserModel, UserRole};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::config;

pub const TOKEN_TTL_HOURS: i64 = 24;

/// Claims carried by every issued token. `role` stays optional on the decode
/// side so a token minted without one is still structurally valid; the gate
/// turns the missing role into its own forbidden signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: Option<UserRole>,
    pub iat: i64,
    pub exp: i64,
}

/// Every way a presented token can be refused. Each kind keeps its own
/// client-facing message so callers can tell "log in again" from "retry later".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,
    #[error("Token format is invalid. Please log out and log back in.")]
    Malformed,
    #[error("Token signature is invalid. The secret key may have changed. Please log out and log back in.")]
    BadSignature,
    #[error("Authorization token is missing")]
    Missing,
    #[error("Token is not fresh")]
    NotFresh,
}

/// Mint a signed token for a stored user. Expiry is issued-at plus the fixed
/// TTL; the role claim is whatever the record holds right now and is not
/// refreshed until the next login.
pub fn issue_token(user: &UserModel) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        role: Some(user.role),
        iat: now.timestamp(),
        exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config().jwt_secret.as_bytes()),
    )
}

pub fn verify_token(token: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::default();
    // the default 60s leeway would accept freshly-expired tokens
    validation.leeway = 0;

    match decode::<Claims>(
        token,
        &DecodingKey::from_secret(config().jwt_secret.as_bytes()),
        &validation,
    ) {
        Ok(data) => Ok(data.claims),
        Err(e) => Err(match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::BadSignature,
            _ => TokenError::Malformed,
        }),
    }
}
