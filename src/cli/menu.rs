// src/cli/menu.rs
use anyhow::Result;
use console::style;
use inquire::error::InquireError;
use inquire::{Confirm, CustomType, Text};

use crate::cli::handlers::{print_record, report_outcome};
use crate::core::Forge;
use crate::generators::{validate_length, PasswordGenerator, SymbolSet};
use crate::models::PasswordGenerationOptions;

// Esc and Ctrl+C end the session instead of surfacing as errors
fn answer<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

macro_rules! ask {
    ($prompt:expr) => {
        match answer($prompt)? {
            Some(value) => value,
            None => {
                println!("\n👋 Goodbye!");
                return Ok(());
            }
        }
    };
}

pub async fn run_cli_menu(forge: &Forge, default_length: usize) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║          🔐 PASSFORGE GENERATOR       ║");
    println!("╚══════════════════════════════════════╝");

    match forge.store().database_status() {
        Ok(db) => log::info!("{} database sink available", db.get_backend_type()),
        Err(reason) => println!(
            "{}",
            style(format!("ℹ️  Only the file sink is available ({})", reason)).dim()
        ),
    }

    loop {
        let raw_length: i64 = ask!(CustomType::<i64>::new("Desired password length:")
            .with_default(default_length as i64)
            .with_error_message("Please type a whole number")
            .prompt());

        let length = match validate_length(raw_length) {
            Ok(length) => length,
            Err(e) => {
                println!("❌ {}", e);
                continue;
            }
        };

        println!("Choose symbols for the password:");
        let mut selected = Vec::new();
        for set in SymbolSet::ALL {
            if ask!(Confirm::new(&format!("{}?", set)).with_default(true).prompt()) {
                selected.push(set);
            }
        }

        let options = PasswordGenerationOptions {
            length,
            include_special: selected.contains(&SymbolSet::Special),
            include_letters: selected.contains(&SymbolSet::Letters),
            include_digits: selected.contains(&SymbolSet::Digits),
            custom_pool: None,
        };

        // Reject an empty selection before asking anything else
        match PasswordGenerator::from_options(&options) {
            Ok(generator) => log::debug!("Pool holds {} symbols", generator.pool().len()),
            Err(e) => {
                println!("❌ {}", e);
                continue;
            }
        }

        let hash = ask!(Confirm::new("Do you need a hashed password?")
            .with_default(false)
            .prompt());

        let service_name = ask!(Text::new("Service name for this password:")
            .with_help_message("Leave empty to skip")
            .prompt());

        let save_file = ask!(Confirm::new("Save the password to a file?")
            .with_default(true)
            .prompt());

        let save_db = if forge.store().has_database() {
            ask!(Confirm::new("Save the password to the database?")
                .with_default(false)
                .prompt())
        } else {
            false
        };

        match forge.create_record(&options, hash, Some(service_name.as_str())) {
            Ok(record) => {
                print_record(&record);
                let outcome = forge.save(&record, save_file, save_db).await;
                report_outcome(forge, &outcome);
            }
            Err(e) => {
                log::error!("Password generation failed: {}", e);
                println!("❌ {}", e);
            }
        }

        let again = ask!(Confirm::new("Generate another password?")
            .with_default(true)
            .prompt());

        if !again {
            println!("\nThank you for using the password generator");
            return Ok(());
        }
    }
}
