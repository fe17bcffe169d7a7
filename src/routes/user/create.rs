use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::identity::Identity;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, PublicUser, RUserCreate};
use crate::utils::password::hash_password;
use entity::user::UserRole;

#[derive(Serialize)]
pub struct Response {
    pub user: PublicUser,
}

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    auth: Option<BearerAuth>,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<Response> {
    let identity = Identity::from_bearer(auth)?;
    identity.require_admin()?;

    let body = body.into_inner();

    let email = body.email.filter(|e| !e.is_empty());
    let password = body.password.filter(|p| !p.is_empty());
    let (email, password) = match (email, password) {
        (Some(email), Some(password)) => (email, password),
        _ => {
            return Err(AppError::Validation(
                "Email and password are required".to_string(),
            ))
        }
    };

    let role = match body.role.as_deref() {
        None => UserRole::User,
        Some(raw) => UserRole::from_str(raw).map_err(|_| {
            AppError::Validation("Invalid role. Must be \"user\" or \"admin\"".to_string())
        })?,
    };

    let password_hash = hash_password(&password)?;

    let user = db
        .create_user(DBUserCreate {
            email,
            password_hash,
            role,
        })
        .await?;

    info!("Created user {} with role {}", user.email, user.role);

    Ok(ApiResponse::Created(Response { user: user.into() }))
}
