use actix_web::get;
use serde::Serialize;

use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize)]
pub struct Response {
    pub status: String,
    pub message: String,
}

#[get("/health")]
async fn health(_req: actix_web::HttpRequest) -> ApiResult<Response> {
    Ok(ApiResponse::Ok(Response {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
    }))
}
