// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};

use crate::models::PasswordGenerationOptions;
use super::charset::{SymbolPool, SymbolSet};
use super::{GeneratorError, Result};

pub struct PasswordGenerator {
    pool: SymbolPool,
}

impl PasswordGenerator {
    pub fn new(pool: SymbolPool) -> Result<Self> {
        if pool.is_empty() {
            return Err(GeneratorError::InvalidInput(
                "Password must contain at least one group of symbols".to_string(),
            ));
        }

        Ok(PasswordGenerator { pool })
    }

    // A custom pool replaces the named sets entirely
    pub fn from_options(options: &PasswordGenerationOptions) -> Result<Self> {
        let pool = match &options.custom_pool {
            Some(symbols) => SymbolPool::custom(symbols),
            None => {
                let mut sets = Vec::new();
                if options.include_special {
                    sets.push(SymbolSet::Special);
                }
                if options.include_letters {
                    sets.push(SymbolSet::Letters);
                }
                if options.include_digits {
                    sets.push(SymbolSet::Digits);
                }
                SymbolPool::from_sets(&sets)
            }
        };

        Self::new(pool)
    }

    pub fn pool(&self) -> &SymbolPool {
        &self.pool
    }

    /// Draw `length` characters independently and uniformly from the pool.
    pub fn generate_password(&self, length: usize) -> Result<String> {
        if length == 0 {
            return Err(GeneratorError::InvalidInput(
                "Password length must be greater than zero".to_string(),
            ));
        }

        let chars = self.pool.as_chars();
        let dist = Uniform::from(0..chars.len());
        let mut rng = rand::thread_rng();

        Ok((0..length).map(|_| chars[dist.sample(&mut rng)]).collect())
    }
}

/// Convert a user-supplied length into a usable one.
pub fn validate_length(length: i64) -> Result<usize> {
    if length <= 0 {
        return Err(GeneratorError::InvalidInput(
            "Password length cannot be less than or equal to zero".to_string(),
        ));
    }

    usize::try_from(length).map_err(|_| {
        GeneratorError::InvalidInput(format!("Password length {} is too large", length))
    })
}
