use actix_web::{post, web};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::identity::Identity;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RLogin;
use crate::utils::password::verify_password;
use crate::utils::token::issue_token;

#[derive(Serialize)]
pub struct Response {
    pub token: String,
    pub user: Identity,
}

#[post("/login")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RLogin>,
) -> ApiResult<Response> {
    let email = body.email.as_deref().filter(|s| !s.is_empty());
    let password = body.password.as_deref().filter(|s| !s.is_empty());

    let (email, password) = match (email, password) {
        (Some(e), Some(p)) => (e, p),
        _ => {
            return Err(AppError::Validation(
                "Email and password are required".to_string(),
            ))
        }
    };

    // unknown email and wrong password get the exact same refusal, so the
    // endpoint cannot be used to probe which addresses exist
    let user = match db.find_user_by_email(email).await? {
        Some(user) if verify_password(password, &user.password_hash) => user,
        _ => return Err(AppError::InvalidCredentials),
    };

    let token = issue_token(&user)?;
    info!("Login successful for user {} ({})", user.id, user.role);

    Ok(ApiResponse::Ok(Response {
        token,
        user: Identity {
            id: user.id,
            email: user.email,
            role: Some(user.role),
        },
    }))
}
