use chrono::{DateTime, Utc};
use entity::user::{Model as UserModel, UserRole};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct RLogin {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RUserCreate {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RUserUpdate {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

pub struct DBUserCreate {
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

#[derive(Default)]
pub struct DBUserUpdate {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<UserRole>,
}

/// Sanitized record view. The password hash never leaves the store through
/// this type, which is the only user shape handlers serialize.
#[derive(Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<UserModel> for PublicUser {
    fn from(user: UserModel) -> Self {
        PublicUser {
            id: user.id,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}
