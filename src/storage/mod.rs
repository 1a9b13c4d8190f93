// src/storage/mod.rs
use std::io;
use thiserror::Error;

use crate::db::{Database, DbError};
use crate::models::PasswordRecord;

pub mod file;

pub use file::FileSink;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] DbError),

    #[error("Database unavailable: {0}")]
    DatabaseUnavailable(String),

    #[error("Refusing to store an empty password")]
    EmptyPassword,
}

pub type Result<T> = std::result::Result<T, StoreError>;

const NO_DATABASE: &str = "no database is configured";

/// Handle over every sink a record can be written to.
///
/// Constructed once at startup and passed to whoever persists records.
#[derive(Debug, Clone)]
pub struct PasswordStore {
    file: FileSink,
    // Why there is no database, when there is none
    db: std::result::Result<Database, String>,
}

impl PasswordStore {
    pub fn new(file: FileSink, db: Option<Database>) -> Self {
        Self {
            file,
            db: db.ok_or_else(|| NO_DATABASE.to_string()),
        }
    }

    /// A store whose database was configured but cannot be used.
    pub fn with_unavailable_database(file: FileSink, reason: impl Into<String>) -> Self {
        Self {
            file,
            db: Err(reason.into()),
        }
    }

    pub fn file_sink(&self) -> &FileSink {
        &self.file
    }

    pub fn database(&self) -> Option<&Database> {
        self.db.as_ref().ok()
    }

    pub fn database_status(&self) -> std::result::Result<&Database, &str> {
        self.db.as_ref().map_err(String::as_str)
    }

    pub fn has_database(&self) -> bool {
        self.db.is_ok()
    }

    pub fn save_to_file(&self, record: &PasswordRecord) -> Result<()> {
        check_record(record)?;
        self.file.append(record)?;
        log::info!("Password saved to {}", self.file.path().display());
        Ok(())
    }

    pub async fn save_to_db(&self, record: &PasswordRecord) -> Result<i64> {
        check_record(record)?;
        let db = self
            .db
            .as_ref()
            .map_err(|reason| StoreError::DatabaseUnavailable(reason.clone()))?;
        let id = db.add_password(record).await?;
        log::info!("Password saved to {} database with id {}", db.get_backend_type(), id);
        Ok(id)
    }

    pub async fn close(&self) {
        if let Ok(db) = &self.db {
            log::info!("Closing database connections...");
            db.close().await;
        }
    }
}

fn check_record(record: &PasswordRecord) -> Result<()> {
    if record.password.is_empty() {
        return Err(StoreError::EmptyPassword);
    }
    Ok(())
}
