// src/db/postgres.rs
use sqlx::{postgres::PgPoolOptions, PgPool, Row};

use crate::models::PasswordRecord;
use super::{DatabaseBackend, DbError};

#[derive(Debug, Clone)]
pub struct PostgresBackend {
    pool: Option<PgPool>,
}

impl PostgresBackend {
    pub fn new() -> Self {
        Self {
            pool: None,
        }
    }

    // Helper to get the pool or return an error
    fn get_pool(&self) -> Result<&PgPool, DbError> {
        self.pool.as_ref().ok_or(DbError::InitError("Database not initialized".into()))
    }
}

impl DatabaseBackend for PostgresBackend {
    async fn init(&mut self, connection_string: &str) -> Result<(), DbError> {
        log::info!("Initializing PostgreSQL database...");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;

        log::info!("Connected to PostgreSQL");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS passwords (
                id BIGSERIAL PRIMARY KEY,
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

        let mut tx = pool.begin().await?;

        let id: i64 = sqlx::query(
            r#"
            INSERT INTO passwords (password, hashed_password, service_name)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&record.password)
        .bind(record.hashed_password.as_deref())
        .bind(record.service_name.as_deref())
        .fetch_one(&mut *tx)
        .await?
        .get("id");

        tx.commit().await?;

        Ok(id)
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
