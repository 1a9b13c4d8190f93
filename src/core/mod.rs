// src/core/mod.rs
pub mod config;
pub mod forge;

pub use forge::{Forge, SaveOutcome};
