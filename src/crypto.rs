// src/crypto.rs
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Argon2 error: {0}")]
    Argon2Error(String),

    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;

/// Argon2id hasher with a tunable work factor.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// `memory_cost` is in KiB.
    pub fn new(memory_cost: u32, time_cost: u32, parallelism: u32) -> Result<Self> {
        let params = argon2::Params::new(memory_cost, time_cost, parallelism, None)
            .map_err(|e| CryptoError::InvalidParams(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params),
        })
    }

    // Salt is fresh on every call, so equal inputs give different hashes
    pub fn hash(&self, password: &str) -> Result<String> {
        use argon2::PasswordHasher as _;

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CryptoError::Argon2Error(e.to_string()))?;

        Ok(password_hash.to_string())
    }

    /// Check a password against a PHC hash string.
    ///
    /// The parameters embedded in the hash are used, not this hasher's own.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| CryptoError::InvalidFormat(format!("Invalid hash format: {}", e)))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(CryptoError::Argon2Error(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cheap parameters keep the tests fast
    fn hasher() -> PasswordHasher {
        PasswordHasher::new(1024, 1, 1).unwrap()
    }

    #[test]
    fn hash_verifies_against_plaintext() {
        let hasher = hasher();
        let hash = hasher.hash("abc123").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("abc123", &hash).unwrap());
        assert!(!hasher.verify("abc124", &hash).unwrap());
    }

    #[test]
    fn salt_differs_per_call() {
        let hasher = hasher();
        let first = hasher.hash("same").unwrap();
        let second = hasher.hash("same").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("same", &first).unwrap());
        assert!(hasher.verify("same", &second).unwrap());
    }

    #[test]
    fn work_factor_is_encoded_in_hash() {
        let hash = PasswordHasher::new(2048, 3, 2).unwrap().hash("pw").unwrap();
        assert!(hash.contains("m=2048,t=3,p=2"));

        // Verifying with a differently tuned hasher still works
        assert!(hasher().verify("pw", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_rejected() {
        assert!(matches!(
            hasher().verify("pw", "not-a-hash"),
            Err(CryptoError::InvalidFormat(_))
        ));
    }

    #[test]
    fn invalid_params_are_rejected() {
        assert!(matches!(
            PasswordHasher::new(1, 0, 1),
            Err(CryptoError::InvalidParams(_))
        ));
    }
}
