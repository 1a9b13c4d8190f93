// src/db/mysql.rs
use sqlx::{mysql::MySqlPoolOptions, MySqlPool, Row};

use crate::models::PasswordRecord;
use super::{DatabaseBackend, DbError};

// MySQL cannot put a UNIQUE key on unbounded TEXT, and has no
// CREATE INDEX IF NOT EXISTS, so the index lives in the table definition.
// The unique columns are byte strings: the default collation ignores case,
// accents and trailing spaces, which would treat distinct passwords as
// duplicates. 1020 bytes holds 255 four-byte characters.
const CREATE_PASSWORDS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS passwords (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        password VARBINARY(1020) NOT NULL UNIQUE,
        hashed_password VARBINARY(1020) UNIQUE,
        service_name VARCHAR(255),
        INDEX idx_passwords_service_name (service_name)
    );
"#;

#[derive(Debug, Clone)]
pub struct MySqlBackend {
    pool: Option<MySqlPool>,
}

impl MySqlBackend {
    pub fn new() -> Self {
        Self {
            pool: None,
        }
    }

    fn get_pool(&self) -> Result<&MySqlPool, DbError> {
        self.pool.as_ref().ok_or(DbError::InitError("Database not initialized".into()))
    }
}

impl DatabaseBackend for MySqlBackend {
    async fn init(&mut self, connection_string: &str) -> Result<(), DbError> {
        log::info!("Initializing MySQL database...");

        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;

        log::info!("Connected to MySQL");

        sqlx::query(CREATE_PASSWORDS_TABLE).execute(&pool).await?;

        self.pool = Some(pool);
        Ok(())
    }

    async fn add_password(&self, record: &PasswordRecord) -> Result<i64, DbError> {
        let pool = self.get_pool()?;

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

        Ok(result.last_insert_id() as i64)
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
