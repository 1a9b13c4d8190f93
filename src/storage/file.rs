// src/storage/file.rs
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::models::PasswordRecord;

/// Append-only text file of password records.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, record: &PasswordRecord) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // One write per block so a record is never split across appends
        file.write_all(format_block(record).as_bytes())?;
        file.flush()
    }
}

pub fn format_block(record: &PasswordRecord) -> String {
    let mut block = format!("Password: {}\n", record.password);
    if let Some(hash) = &record.hashed_password {
        block.push_str(&format!("Hashed password: {}\n", hash));
    }
    if let Some(service) = &record.service_name {
        block.push_str(&format!("Service name: {}\n", service));
    }
    block.push('\n');
    block
}
