// src/generators/mod.rs
use thiserror::Error;

pub mod charset;
pub mod password;

pub use charset::SymbolSet;
pub use password::{validate_length, PasswordGenerator};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
