// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a single password without prompting
    Generate {
        /// Password length
        #[arg(long, short, default_value_t = 16, allow_hyphen_values = true)]
        length: i64,

        /// Include special characters
        #[arg(long)]
        special: bool,

        /// Include letters
        #[arg(long)]
        letters: bool,

        /// Include digits
        #[arg(long)]
        digits: bool,

        /// Draw from these characters instead of the named sets
        #[arg(long, conflicts_with_all = ["special", "letters", "digits"])]
        pool: Option<String>,

        /// Also produce an Argon2id hash of the password
        #[arg(long)]
        hash: bool,

        /// Service the password is meant for
        #[arg(long)]
        service: Option<String>,

        /// Append the result to the password file
        #[arg(long)]
        save_file: bool,

        /// Insert the result into the database
        #[arg(long)]
        save_db: bool,
    },

    /// Check a password against a stored hash
    Verify {
        #[arg(long)]
        password: String,

        #[arg(long)]
        hash: String,
    },

    /// Connect to the configured database and make sure it answers
    CheckDb,
}
