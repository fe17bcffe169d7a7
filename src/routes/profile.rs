use actix_web::get;
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::Serialize;

use crate::types::identity::Identity;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize)]
pub struct Response {
    pub user: Identity,
}

/// Whatever the token says is the profile; no directory lookup involved.
#[get("/profile")]
async fn profile(_req: actix_web::HttpRequest, auth: Option<BearerAuth>) -> ApiResult<Response> {
    let identity = Identity::from_bearer(auth)?;

    Ok(ApiResponse::Ok(Response { user: identity }))
}
