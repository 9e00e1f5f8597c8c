//! Database primitives: pool wiring and the employee repository.

mod employees;

use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

pub use employees::{EmployeeRepository, SeaOrmEmployeeRepository};

/// Shared connection pool alias.
pub type DbPool = DatabaseConnection;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("database url missing (set {0})")]
    MissingUrl(String),
    #[error("employee {0} no longer exists")]
    RecordMissing(i64),
    #[error(transparent)]
    Query(#[from] DbErr),
}

pub type DbResult<T> = Result<T, DbError>;

/// Environment-driven connection settings.
#[derive(Clone, Debug, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_url_key")]
    env_key: String,
    #[serde(default = "default_max_connections")]
    max_connections: u32,
}

fn default_url_key() -> String {
    "DATABASE_URL".to_string()
}

fn default_max_connections() -> u32 {
    10
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            env_key: default_url_key(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseSettings {
    pub fn new(env_key: impl Into<String>) -> Self {
        Self {
            env_key: env_key.into(),
            ..Self::default()
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }

    pub fn database_url(&self) -> DbResult<String> {
        std::env::var(&self.env_key).map_err(|_| DbError::MissingUrl(self.env_key.clone()))
    }
}

pub async fn connect(settings: &DatabaseSettings) -> DbResult<DbPool> {
    let url = settings.database_url()?;
    connect_url(&url, settings.max_connections).await
}

pub async fn connect_url(url: &str, max_connections: u32) -> DbResult<DbPool> {
    let mut options = ConnectOptions::new(url.to_owned());
    options
        .max_connections(max_connections)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    let pool = Database::connect(options).await?;
    info!(max_connections, backend = ?pool.get_database_backend(), "database pool ready");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_url_names_the_variable() {
        let settings = DatabaseSettings::new("EMPLOYEE_DB_URL_THAT_IS_NEVER_SET");
        let err = settings.database_url().unwrap_err();
        assert_eq!(
            err.to_string(),
            "database url missing (set EMPLOYEE_DB_URL_THAT_IS_NEVER_SET)"
        );
    }

    #[test]
    fn pool_size_defaults_to_ten() {
        assert_eq!(DatabaseSettings::default().max_connections(), 10);
        assert_eq!(
            DatabaseSettings::default()
                .with_max_connections(3)
                .max_connections(),
            3
        );
    }

    #[tokio::test]
    async fn connects_to_in_memory_sqlite() {
        let pool = connect_url("sqlite::memory:", 1).await.unwrap();
        assert_eq!(
            pool.get_database_backend(),
            sea_orm::DatabaseBackend::Sqlite
        );
    }
}
