use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::utils::token::TokenError;

#[derive(Debug, Error)]
pub enum AppError {
    // request validation
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),

    // authentication / authorization
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error("Admin access required")]
    Forbidden,
    #[error("User role not found in token")]
    RoleNotFound,

    // directory outcomes
    #[error("User not found")]
    NotFound,
    #[error("Email already exists")]
    AlreadyExists,

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        AppError::Internal(format!("token signing failed: {}", e))
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(e: argon2::password_hash::Error) -> Self {
        AppError::Internal(format!("password hashing failed: {}", e))
    }
}

/// Stable wire shape for every error the API emits.
#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl AppError {
    fn from_db(err: DbErr) -> Self {
        // the unique index on email is the only constraint in the schema,
        // so any violation is a duplicate-email conflict
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::AlreadyExists,
            _ => match &err {
                DbErr::RecordNotFound(_) => AppError::NotFound,
                _ => AppError::Db(err),
            },
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Token(e) => match e {
                TokenError::Expired | TokenError::Missing | TokenError::NotFresh => {
                    StatusCode::UNAUTHORIZED
                }
                TokenError::Malformed | TokenError::BadSignature => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
            },
            Self::Forbidden | Self::RoleNotFound => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // 500s keep their detail in the server log only
        let message = match self {
            Self::Db(e) => {
                error!("database error: {}", e);
                "Internal server error".to_string()
            }
            Self::Internal(detail) => {
                error!("internal error: {}", detail);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorBody { error: &message })
    }
}
