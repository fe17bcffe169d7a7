use actix_web::{delete, web};
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

#[derive(Serialize)]
pub struct Response {
    pub message: String,
}

#[delete("/{id}")]
async fn delete(
    _req: actix_web::HttpRequest,
    auth: Option<BearerAuth>,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
) -> ApiResult<Response> {
    let identity = Identity::from_bearer(auth)?;
    identity.require_admin()?;

    let user_id = Uuid::from_str(&path)
        .map_err(|_| AppError::BadRequest("Invalid user ID. Failed UUID parse.".to_string()))?;

    db.delete_user(&user_id).await?;

    info!("Deleted user {}", user_id);

    Ok(ApiResponse::Ok(Response {
        message: "User deleted successfully".to_string(),
    }))
}
