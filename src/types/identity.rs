use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::user::UserRole;
use serde::Serialize;
use uuid::Uuid;

use crate::types::error::AppError;
use crate::utils::token::{verify_token, TokenError};

/// Caller identity for one request, rebuilt from the bearer token every time.
/// Email and role are taken from the claims as-is, so a promotion or demotion
/// only shows up once the user logs in again.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub role: Option<UserRole>,
}

impl Identity {
    /// Gate for every protected handler. Call this first; nothing of the
    /// handler body runs when the token is missing or refused.
    pub fn from_bearer(auth: Option<BearerAuth>) -> Result<Self, AppError> {
        let auth = auth.ok_or(TokenError::Missing)?;
        let claims = verify_token(auth.token())?;
        let id = Uuid::parse_str(&claims.sub).map_err(|_| TokenError::Malformed)?;

        Ok(Identity {
            id,
            email: claims.email,
            role: claims.role,
        })
    }

    /// A token without any role claim gets the more specific refusal.
    pub fn require_admin(&self) -> Result<(), AppError> {
        match self.role {
            Some(UserRole::Admin) => Ok(()),
            Some(_) => Err(AppError::Forbidden),
            None => Err(AppError::RoleNotFound),
        }
    }
}
