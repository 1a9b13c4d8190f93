// src/core/forge.rs
use thiserror::Error;

use crate::crypto::{CryptoError, PasswordHasher};
use crate::generators::{GeneratorError, PasswordGenerator};
use crate::models::{PasswordGenerationOptions, PasswordRecord};
use crate::storage::{self, PasswordStore};

#[derive(Debug, Error)]
pub enum ForgeError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("Hashing failed: {0}")]
    Crypto(#[from] CryptoError),
}

/// Result of writing one record, per requested sink.
///
/// `None` means the sink was not requested.
#[derive(Debug)]
pub struct SaveOutcome {
    pub file: Option<storage::Result<()>>,
    pub db: Option<storage::Result<i64>>,
}

impl SaveOutcome {
    pub fn is_ok(&self) -> bool {
        let file_ok = self.file.as_ref().map_or(true, |r| r.is_ok());
        let db_ok = self.db.as_ref().map_or(true, |r| r.is_ok());
        file_ok && db_ok
    }
}

/// Generates, hashes and persists password records.
pub struct Forge {
    hasher: PasswordHasher,
    store: PasswordStore,
}

impl Forge {
    pub fn new(hasher: PasswordHasher, store: PasswordStore) -> Self {
        Self { hasher, store }
    }

    pub fn store(&self) -> &PasswordStore {
        &self.store
    }

    // Validation happens before anything is generated or written
    pub fn create_record(
        &self,
        options: &PasswordGenerationOptions,
        hash: bool,
        service_name: Option<&str>,
    ) -> Result<PasswordRecord, ForgeError> {
        let generator = PasswordGenerator::from_options(options)?;
        let password = generator.generate_password(options.length)?;

        let hashed_password = if hash {
            Some(self.hasher.hash(&password)?)
        } else {
            None
        };

        Ok(PasswordRecord::new(password)
            .with_hash(hashed_password)
            .with_service(service_name))
    }

    /// Write a record to the requested sinks.
    ///
    /// A failing sink is logged and reported in the outcome; the other sink is
    /// still attempted.
    pub async fn save(&self, record: &PasswordRecord, to_file: bool, to_db: bool) -> SaveOutcome {
        let file = to_file.then(|| {
            let result = self.store.save_to_file(record);
            if let Err(e) = &result {
                log::error!("Failed to save password to file: {}", e);
            }
            result
        });

        let db = if to_db {
            let result = self.store.save_to_db(record).await;
            if let Err(e) = &result {
                log::error!("Failed to save password to database: {}", e);
            }
            Some(result)
        } else {
            None
        };

        SaveOutcome { file, db }
    }
}
