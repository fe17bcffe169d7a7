use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use crate::types::error::AppError;

#[derive(Clone)]
pub struct PostgresService {
    pub(crate) db: DatabaseConnection,
}

impl PostgresService {
    /// Connect, bring the schema up to date and make sure the two default
    /// accounts exist. Everything else goes through the typed methods in
    /// `db::user`.
    pub async fn new(uri: &str) -> Result<Self, AppError> {
        info!("Connecting to PostgreSQL...");
        let db = Database::connect(uri).await.map_err(AppError::from)?;

        info!("Running migrations...");
        Migrator::up(&db, None).await.map_err(AppError::from)?;

        let service = Self { db };
        service.seed_default_users().await?;

        info!("Connected to PostgreSQL.");
        Ok(service)
    }
}
