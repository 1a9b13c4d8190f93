use clap::Parser;
use std::path::Path;

mod cli;
mod core;
mod crypto;
mod db;
mod generators;
mod models;
mod storage;

use crate::cli::{Args, CliCommand};
use crate::cli::handlers::{self, GenerateRequest};
use crate::core::config::Config;
use crate::core::Forge;
use crate::crypto::PasswordHasher;
use crate::storage::{FileSink, PasswordStore};

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Some(log_file) = &config.log_file {
        if let Some(parent) = log_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

// A database that cannot be reached leaves the file sink usable
async fn open_store(args: &Args, config: &Config, file: FileSink) -> PasswordStore {
    let db_url = match &args.db {
        Some(url) => Some(url.clone()),
        None => match config.get_database_url() {
            Ok(url) => url,
            Err(e) => {
                log::error!("Database configuration error: {}", e);
                eprintln!("❌ Database configuration error: {}", e);
                let reason = format!("database configuration error: {}", e);
                return PasswordStore::with_unavailable_database(file, reason);
            }
        },
    };

    let Some(db_url) = db_url else {
        return PasswordStore::new(file, None);
    };

    match db::init_db(&db_url).await {
        Ok(db) => {
            log::info!("Connected to {} database", db.get_backend_type());
            PasswordStore::new(file, Some(db))
        }
        Err(e) => {
            log::error!("Database connection failed: {}", e);
            eprintln!("❌ Database connection failed: {e}");
            eprintln!("Passwords can still be saved to a file.");
            let reason = format!("database connection failed: {}", e);
            PasswordStore::with_unavailable_database(file, reason)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();
    init_logging(&config)?;
    log::debug!("Loaded config: {:?}", config);

    let hasher = PasswordHasher::new(
        config.kdf_memory_cost,
        config.kdf_time_cost,
        config.kdf_parallelism,
    )?;

    // Verifying needs neither sink
    if let Some(CliCommand::Verify { password, hash }) = &args.command {
        let matches = handlers::handle_verify(&hasher, password, hash)?;
        std::process::exit(if matches { 0 } else { 1 });
    }

    let file = args.file.clone().unwrap_or_else(|| config.password_file.clone());
    let store = open_store(&args, &config, FileSink::new(file)).await;
    let forge = Forge::new(hasher, store);

    let result = match args.command {
        Some(CliCommand::Generate {
            length,
            special,
            letters,
            digits,
            pool,
            hash,
            service,
            save_file,
            save_db,
        }) => {
            let request = GenerateRequest {
                length,
                special,
                letters,
                digits,
                pool,
                hash,
                service,
                save_file,
                save_db,
            };
            handlers::handle_generate(&forge, request, args.json).await
        }
        Some(CliCommand::CheckDb) => handlers::handle_check_db(forge.store()).await,
        Some(CliCommand::Verify { .. }) => Ok(()),
        None => cli::menu::run_cli_menu(&forge, config.default_password_length).await,
    };

    forge.store().close().await;
    log::info!("Shutdown complete");

    result
}
