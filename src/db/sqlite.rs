// src/db/sqlite.rs
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Row,
};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::models::PasswordRecord;
use super::{DatabaseBackend, DbError};

#[derive(Debug, Clone)]
pub struct SqliteBackend {
    pool: Option<SqlitePool>,
}

impl SqliteBackend {
    pub fn new() -> Self {
        Self {
            pool: None,
        }
    }

    // Helper to get the pool or return an error
    fn get_pool(&self) -> Result<&SqlitePool, DbError> {
        self.pool.as_ref().ok_or(DbError::InitError("Database not initialized".into()))
    }
}

// sqlx accepts both `sqlite:path` and `sqlite://path`; let it do the parsing
fn parse_options(connection_string: &str) -> Result<SqliteConnectOptions, DbError> {
    if !connection_string.starts_with("sqlite:") {
        return Err(DbError::ConfigError("Invalid SQLite connection string".into()));
    }
    Ok(SqliteConnectOptions::from_str(connection_string)?)
}

fn database_directory(options: &SqliteConnectOptions) -> Option<PathBuf> {
    options
        .clone()
        .get_filename()
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

impl DatabaseBackend for SqliteBackend {
    async fn init(&mut self, connection_string: &str) -> Result<(), DbError> {
        let options = parse_options(connection_string)?.create_if_missing(true);

        // Create the database directory if it doesn't exist
        if let Some(parent) = database_directory(&options) {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DbError::InitError(format!("Failed to create database directory: {}", e))
                })?;
            }
        }

        log::info!("Initializing SQLite database at: {}", options.clone().get_filename().display());

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS passwords (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                password TEXT NOT NULL UNIQUE,
                hashed_password TEXT UNIQUE,
                service_name TEXT
            );
            "#,
        )
        .execute(&pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_passwords_service_name ON passwords(service_name);",
        )
        .execute(&pool)
        .await?;

        self.pool = Some(pool);
        Ok(())
    }

    async fn add_password(&self, record: &PasswordRecord) -> Result<i64, DbError> {
        let pool = self.get_pool()?;

        // Dropping the transaction on an early return rolls it back
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO passwords (password, hashed_password, service_name)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&record.password)
        .bind(record.hashed_password.as_deref())
        .bind(record.service_name.as_deref())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(result.last_insert_rowid())
    }

    async fn get_password_count(&self) -> Result<usize, DbError> {
        let pool = self.get_pool()?;

        let row = sqlx::query("SELECT COUNT(*) AS count FROM passwords")
            .fetch_one(pool)
            .await?;

        let count: i64 = row.get("count");
        Ok(count as usize)
    }

    async fn ping(&self) -> Result<(), DbError> {
        let pool = self.get_pool()?;
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.db");
        let url = format!("sqlite:{}", path.display());

        let mut backend = SqliteBackend::new();
        backend.init(&url).await.unwrap();

        assert!(path.exists());
    }

    fn directory_of(url: &str) -> Option<std::path::PathBuf> {
        let options = parse_options(url).unwrap();
        database_directory(&options)
    }

    #[test]
    fn directory_comes_from_the_parsed_filename() {
        assert_eq!(directory_of("sqlite://nested/x.db").as_deref(), Some(Path::new("nested")));
        assert_eq!(directory_of("sqlite:nested/x.db").as_deref(), Some(Path::new("nested")));
        assert_eq!(
            directory_of("sqlite:///srv/data/x.db").as_deref(),
            Some(Path::new("/srv/data"))
        );
        assert_eq!(directory_of("sqlite://x.db"), None);
    }

    #[test]
    fn non_sqlite_url_is_a_config_error() {
        assert!(matches!(parse_options("postgres://h/db"), Err(DbError::ConfigError(_))));
    }

    #[tokio::test]
    async fn double_slash_url_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deeper").join("x.db");
        let url = format!("sqlite://{}", path.display());

        let mut backend = SqliteBackend::new();
        backend.init(&url).await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn uninitialized_backend_reports_init_error() {
        let backend = SqliteBackend::new();
        let result = backend.add_password(&PasswordRecord::new("x")).await;
        assert!(matches!(result, Err(DbError::InitError(_))));
    }

    #[tokio::test]
    async fn row_ids_increase() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = SqliteBackend::new();
        backend
            .init(&format!("sqlite:{}", dir.path().join("ids.db").display()))
            .await
            .unwrap();

        let first = backend.add_password(&PasswordRecord::new("a")).await.unwrap();
        let second = backend.add_password(&PasswordRecord::new("b")).await.unwrap();
        assert!(second > first);
    }
}
