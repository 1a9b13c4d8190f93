// src/cli/mod.rs
use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print generated records as JSON
    #[arg(long)]
    pub json: bool,

    /// Database URL (overrides DB_TYPE/DB_HOST/DB_USER/DB_PASSWORD/DB_NAME)
    #[arg(long, short, env = "DATABASE_URL")]
    pub db: Option<String>,

    /// File that generated passwords are appended to
    #[arg(long, short, env = "PASSWORD_FILE")]
    pub file: Option<PathBuf>,

    /// Command to execute; the interactive menu runs when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_interactive() {
        let args = Args::try_parse_from(["passforge"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.json);
    }

    #[test]
    fn generate_flags_parse() {
        let args = Args::try_parse_from([
            "passforge", "--json", "generate", "--length", "24", "--letters", "--digits",
            "--hash", "--service", "github", "--save-file",
        ])
        .unwrap();

        assert!(args.json);
        match args.command {
            Some(CliCommand::Generate {
                length,
                letters,
                digits,
                special,
                hash,
                service,
                save_file,
                save_db,
                pool,
            }) => {
                assert_eq!(length, 24);
                assert!(letters && digits && hash && save_file);
                assert!(!special && !save_db);
                assert_eq!(service.as_deref(), Some("github"));
                assert!(pool.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn negative_length_reaches_validation() {
        let args = Args::try_parse_from(["passforge", "generate", "--length", "-5"]).unwrap();
        assert!(matches!(args.command, Some(CliCommand::Generate { length: -5, .. })));
    }

    #[test]
    fn verify_requires_both_values() {
        assert!(Args::try_parse_from(["passforge", "verify", "--password", "x"]).is_err());
        let args =
            Args::try_parse_from(["passforge", "verify", "--password", "x", "--hash", "h"])
                .unwrap();
        assert!(matches!(args.command, Some(CliCommand::Verify { .. })));
    }
}
