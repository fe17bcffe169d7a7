use actix_web::{put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::identity::Identity;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserUpdate, PublicUser, RUserUpdate};
use crate::utils::password::hash_password;
use entity::user::UserRole;

#[derive(Serialize)]
pub struct Response {
    pub user: PublicUser,
}

#[put("/{id}")]
async fn update(
    _req: actix_web::HttpRequest,
    auth: Option<BearerAuth>,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
    body: web::Json<RUserUpdate>,
) -> ApiResult<Response> {
    let identity = Identity::from_bearer(auth)?;
    identity.require_admin()?;

    let user_id = Uuid::from_str(&path)
        .map_err(|_| AppError::BadRequest("Invalid user ID. Failed UUID parse.".to_string()))?;

    let body = body.into_inner();

    // Empty strings are treated the same as absent fields.
    let email = body.email.filter(|e| !e.is_empty());
    let password = body.password.filter(|p| !p.is_empty());
    let role = body.role.filter(|r| !r.is_empty());

    if email.is_none() && password.is_none() && role.is_none() {
        return Err(AppError::Validation("No valid fields to update".to_string()));
    }

    let role = role
        .as_deref()
        .map(UserRole::from_str)
        .transpose()
        .map_err(|_| {
            AppError::Validation("Invalid role. Must be \"user\" or \"admin\"".to_string())
        })?;

    let password_hash = password.map(|p| hash_password(&p)).transpose()?;

    let user = db
        .update_user(
            &user_id,
            DBUserUpdate {
                email,
                password_hash,
                role,
            },
        )
        .await?;

    info!("Updated user {}", user.id);

    Ok(ApiResponse::Ok(Response { user: user.into() }))
}
