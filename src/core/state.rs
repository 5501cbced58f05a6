use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Server state — shared references handed to every request handler
///
/// Cloning is cheap: the database service wraps a pooled connection handle.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Database service (SQLite pool)
    pub db: DbService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    /// Initialize all services from configuration
    ///
    /// Opens the database and applies migrations. Fails fast: without a
    /// working store the server cannot serve correctly.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self::new(config.clone(), db))
    }
}
