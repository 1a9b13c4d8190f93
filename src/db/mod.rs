// src/db/mod.rs
use crate::models::PasswordRecord;
use thiserror::Error;

pub mod mysql;
pub mod postgres;
pub mod sqlite;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    SqlxError(String),

    #[error("Password already stored: {0}")]
    UniqueViolation(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Initialization error: {0}")]
    InitError(String),
}

// Constraint violations get their own variant so callers can tell a
// duplicate apart from a broken connection
impl From<sqlx::Error> for DbError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DbError::UniqueViolation(db_err.message().to_string())
            }
            _ => DbError::SqlxError(error.to_string()),
        }
    }
}

// Database backend trait - to be implemented by each database type
pub trait DatabaseBackend: Send + Sync {
    // Connect and create the schema if it is missing
    async fn init(&mut self, connection_string: &str) -> Result<(), DbError>;

    // Insert one record in its own transaction, returning the new row id
    async fn add_password(&self, record: &PasswordRecord) -> Result<i64, DbError>;

    async fn get_password_count(&self) -> Result<usize, DbError>;

    async fn ping(&self) -> Result<(), DbError>;

    async fn close(&self);
}

#[derive(Debug, Clone)]
pub enum DatabaseType {
    Postgres(postgres::PostgresBackend),
    MySql(mysql::MySqlBackend),
    Sqlite(sqlite::SqliteBackend),
}

#[derive(Debug, Clone)]
pub struct Database {
    pub backend: DatabaseType,
}

impl Database {
    // Pick the backend from the URL scheme
    pub async fn new(connection_string: &str) -> Result<Self, DbError> {
        let backend = if connection_string.starts_with("sqlite:") {
            let mut backend = sqlite::SqliteBackend::new();
            backend.init(connection_string).await?;
            DatabaseType::Sqlite(backend)
        } else if connection_string.starts_with("mysql:") {
            let mut backend = mysql::MySqlBackend::new();
            backend.init(connection_string).await?;
            DatabaseType::MySql(backend)
        } else if connection_string.starts_with("postgres:")
            || connection_string.starts_with("postgresql:")
        {
            let mut backend = postgres::PostgresBackend::new();
            backend.init(connection_string).await?;
            DatabaseType::Postgres(backend)
        } else {
            return Err(DbError::ConfigError(format!(
                "Unsupported database URL scheme: {}",
                connection_string.split(':').next().unwrap_or_default()
            )));
        };

        Ok(Self { backend })
    }

    pub async fn add_password(&self, record: &PasswordRecord) -> Result<i64, DbError> {
        match &self.backend {
            DatabaseType::Postgres(backend) => backend.add_password(record).await,
            DatabaseType::MySql(backend) => backend.add_password(record).await,
            DatabaseType::Sqlite(backend) => backend.add_password(record).await,
        }
    }

    pub async fn get_password_count(&self) -> Result<usize, DbError> {
        match &self.backend {
            DatabaseType::Postgres(backend) => backend.get_password_count().await,
            DatabaseType::MySql(backend) => backend.get_password_count().await,
            DatabaseType::Sqlite(backend) => backend.get_password_count().await,
        }
    }

    pub async fn ping(&self) -> Result<(), DbError> {
        match &self.backend {
            DatabaseType::Postgres(backend) => backend.ping().await,
            DatabaseType::MySql(backend) => backend.ping().await,
            DatabaseType::Sqlite(backend) => backend.ping().await,
        }
    }

    pub async fn close(&self) {
        match &self.backend {
            DatabaseType::Postgres(backend) => backend.close().await,
            DatabaseType::MySql(backend) => backend.close().await,
            DatabaseType::Sqlite(backend) => backend.close().await,
        }
    }

    pub fn get_backend_type(&self) -> &str {
        match &self.backend {
            DatabaseType::Sqlite(_) => "SQLite",
            DatabaseType::MySql(_) => "MySQL",
            DatabaseType::Postgres(_) => "PostgreSQL",
        }
    }
}

// Function to initialize the database
pub async fn init_db(db_url: &str) -> Result<Database, DbError> {
    Database::new(db_url).await
}
