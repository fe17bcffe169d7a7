use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

use directory_auth::config::{EnvConfig, CONFIG};
use directory_auth::db::postgres_service::PostgresService;
use directory_auth::utils::token::Claims;
use entity::user::UserRole;

pub mod client;

pub const TEST_JWT_SECRET: &str = "test-secret-key";

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        CONFIG.get_or_init(get_test_config);

        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "unused-in-tests".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
    }
}

/// Mint a token by hand so tests can produce what the API never issues:
/// expired tokens, tokens signed with a foreign secret, tokens without a
/// role claim and tokens whose subject is not a UUID.
#[allow(dead_code)]
pub fn mint_token(
    sub: &str,
    email: &str,
    role: Option<UserRole>,
    secret: &str,
    ttl_hours: i64,
) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: sub.to_string(),
        email: email.to_string(),
        role,
        iat: (now - Duration::hours(1)).timestamp(),
        exp: (now + Duration::hours(ttl_hours)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to mint token")
}

// Test data helpers
pub mod test_data {
    use directory_auth::types::user::RUserCreate;
    use uuid::Uuid;

    #[allow(dead_code)]
    pub fn sample_user() -> RUserCreate {
        RUserCreate {
            email: Some(format!("new-user-{}@test.com", Uuid::new_v4())),
            password: Some("password123".to_string()),
            role: None,
        }
    }

    #[allow(dead_code)]
    pub fn sample_user_with_email(email: &str) -> RUserCreate {
        RUserCreate {
            email: Some(email.to_string()),
            password: Some("password123".to_string()),
            role: None,
        }
    }
}
