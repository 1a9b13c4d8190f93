// src/cli/handlers.rs
use anyhow::{anyhow, bail, Result};
use console::style;

use crate::core::{Forge, SaveOutcome};
use crate::crypto::PasswordHasher;
use crate::generators::validate_length;
use crate::models::{PasswordGenerationOptions, PasswordRecord};
use crate::storage::PasswordStore;

pub struct GenerateRequest {
    pub length: i64,
    pub special: bool,
    pub letters: bool,
    pub digits: bool,
    pub pool: Option<String>,
    pub hash: bool,
    pub service: Option<String>,
    pub save_file: bool,
    pub save_db: bool,
}

impl GenerateRequest {
    // With no set chosen and no custom pool, every named set is used
    pub fn options(&self) -> Result<PasswordGenerationOptions> {
        let length = validate_length(self.length)?;
        let none_selected = !self.special && !self.letters && !self.digits && self.pool.is_none();

        Ok(PasswordGenerationOptions {
            length,
            include_special: self.special || none_selected,
            include_letters: self.letters || none_selected,
            include_digits: self.digits || none_selected,
            custom_pool: self.pool.clone(),
        })
    }
}

pub async fn handle_generate(forge: &Forge, request: GenerateRequest, json: bool) -> Result<()> {
    let options = request.options()?;
    let record = forge.create_record(&options, request.hash, request.service.as_deref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&record);
    }

    let outcome = forge.save(&record, request.save_file, request.save_db).await;
    report_outcome(forge, &outcome);

    if !outcome.is_ok() {
        bail!("the password could not be saved everywhere it was requested");
    }
    Ok(())
}

pub fn handle_verify(hasher: &PasswordHasher, password: &str, hash: &str) -> Result<bool> {
    let matches = hasher.verify(password, hash)?;
    if matches {
        println!("{}", style("✅ Password matches the hash").green());
    } else {
        println!("{}", style("❌ Password does not match the hash").red());
    }
    Ok(matches)
}

pub async fn handle_check_db(store: &PasswordStore) -> Result<()> {
    let db = store.database_status().map_err(|reason| anyhow!("{}", reason))?;
    db.ping().await?;
    let count = db.get_password_count().await?;
    println!(
        "✅ {} database is working ({} stored passwords)",
        db.get_backend_type(),
        count
    );
    Ok(())
}

pub fn print_record(record: &PasswordRecord) {
    println!("\nPassword: {}", style(&record.password).bold());
    if let Some(hash) = &record.hashed_password {
        println!("Hashed password: {}", hash);
    }
    if let Some(service) = &record.service_name {
        println!("Service name: {}", service);
    }
}

pub fn report_outcome(forge: &Forge, outcome: &SaveOutcome) {
    match &outcome.file {
        Some(Ok(())) => println!(
            "✅ Saved to file {}",
            forge.store().file_sink().path().display()
        ),
        Some(Err(e)) => eprintln!("{} {}", style("❌ Could not save to file:").red(), e),
        None => {}
    }

    match &outcome.db {
        Some(Ok(id)) => println!("✅ Saved to database (id {})", id),
        Some(Err(e)) => eprintln!("{} {}", style("❌ Could not save to database:").red(), e),
        None => {}
    }
}
