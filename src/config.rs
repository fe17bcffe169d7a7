use std::env;
use std::sync::OnceLock;

use tracing::warn;

/// Development fallback only. Any real deployment is expected to set
/// JWT_SECRET_KEY; rotating it invalidates every outstanding token.
pub const DEV_JWT_SECRET: &str = "your-secret-key-change-in-production";

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub jwt_secret: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let db_url: String = Self::get_env("POSTGRES_URI");

        let jwt_secret = env::var("JWT_SECRET_KEY").unwrap_or_else(|_| {
            warn!("JWT_SECRET_KEY not set, using the development default secret");
            DEV_JWT_SECRET.to_string()
        });

        EnvConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            db_url,
            jwt_secret,
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}
