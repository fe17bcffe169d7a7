use actix_web::{web, App};
use std::sync::Arc;

use directory_auth::{
    db::postgres_service::PostgresService,
    types::user::DBUserCreate,
    utils::{password::hash_password, token::issue_token},
};
use entity::user::UserRole;
use uuid::Uuid;

#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "password123";

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(directory_auth::routes::configure_routes)
    }

    /// Inserts straight into the directory and mints the token the same way
    /// /login would, so tests do not have to round-trip every setup step.
    #[allow(dead_code)]
    pub async fn create_test_admin(&self) -> (Uuid, String) {
        let random_id = Uuid::new_v4();

        let admin = self
            .db
            .create_user(DBUserCreate {
                email: format!("admin-{}@test.com", random_id),
                password_hash: hash_password(TEST_PASSWORD).expect("Failed to hash password"),
                role: UserRole::Admin,
            })
            .await
            .expect("Failed to create admin");

        let token = issue_token(&admin).expect("Failed to issue token");

        (admin.id, token)
    }

    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: Option<String>) -> (Uuid, String) {
        let random_id = Uuid::new_v4();
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", random_id));

        let user = self
            .db
            .create_user(DBUserCreate {
                email,
                password_hash: hash_password(TEST_PASSWORD).expect("Failed to hash password"),
                role: UserRole::User,
            })
            .await
            .expect("Failed to create user");

        let token = issue_token(&user).expect("Failed to issue token");

        (user.id, token)
    }
}
