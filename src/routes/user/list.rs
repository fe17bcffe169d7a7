use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::Serialize;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::identity::Identity;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::PublicUser;

#[derive(Serialize)]
pub struct Response {
    pub users: Vec<PublicUser>,
}

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    auth: Option<BearerAuth>,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Response> {
    let identity = Identity::from_bearer(auth)?;
    identity.require_admin()?;

    let users = db.list_users().await?;

    Ok(ApiResponse::Ok(Response {
        users: users.into_iter().map(PublicUser::from).collect(),
    }))
}
