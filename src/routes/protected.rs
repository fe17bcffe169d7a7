use actix_web::get;
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::Serialize;

use crate::types::identity::Identity;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize)]
pub struct Response {
    pub message: String,
    pub user: Identity,
}

#[get("/protected")]
async fn protected(_req: actix_web::HttpRequest, auth: Option<BearerAuth>) -> ApiResult<Response> {
    let identity = Identity::from_bearer(auth)?;

    Ok(ApiResponse::Ok(Response {
        message: "This is a protected route".to_string(),
        user: identity,
    }))
}
