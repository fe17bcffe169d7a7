use actix_web::web;

use crate::types::error::AppError;

pub mod health;
pub mod login;
pub mod profile;
pub mod protected;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // keep body-parse failures in the same {"error": ...} shape as the rest
    let json_cfg = web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid JSON payload: {}", err)).into()
    });

    cfg.service(
        web::scope("/api")
            .app_data(json_cfg)
            .service(health::health)
            .service(login::login)
            .service(profile::profile)
            .service(protected::protected)
            .service(
                web::scope("/users")
                    .service(user::list::list)
                    .service(user::create::create)
                    .service(user::update::update)
                    .service(user::delete::delete),
            ),
    );
}
