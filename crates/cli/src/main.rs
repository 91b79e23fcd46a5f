//! Ordem CLI - store management and remote backup tools.
//!
//! # Usage
//!
//! ```bash
//! # Reset the store to the fixed seed dataset
//! ordem seed
//!
//! # Show collection counts and recent audit entries
//! ordem status
//!
//! # Export / import the whole aggregate
//! ordem export --output backup.json
//! ordem import backup.json
//!
//! # Remote gist backup
//! ordem backup configure --gist-id <id> --filename backup.json
//! ordem backup push
//! ordem backup pull
//! ordem backup test
//! ```
//!
//! The persistence slot file defaults to `ordem-data.json` and can be moved
//! with `--data-file` or the `ORDEM_DATA_FILE` environment variable. The
//! gist access token is read from the stored settings; `ORDEM_GIST_TOKEN`
//! overrides it without writing it to disk.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ordem")]
#[command(author, version, about = "Ordem service-order store tools")]
struct Cli {
    /// Persistence slot file
    #[arg(
        long,
        global = true,
        env = "ORDEM_DATA_FILE",
        default_value = "ordem-data.json"
    )]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reset the store to the fixed seed dataset
    Seed,
    /// Show collection counts and recent audit entries
    Status,
    /// Export the whole aggregate as pretty-printed JSON
    Export {
        /// Output file
        #[arg(short, long, default_value = "ordem-export.json")]
        output: PathBuf,
    },
    /// Replace the whole aggregate with an exported JSON file
    Import {
        /// Exported file to read
        file: PathBuf,
    },
    /// Manual remote backup against the configured gist
    Backup {
        #[command(subcommand)]
        action: BackupAction,
    },
}

#[derive(Subcommand)]
enum BackupAction {
    /// Store the gist ID and filename (and optionally the token) in settings
    Configure {
        /// Gist ID (the hash in the gist URL)
        #[arg(long)]
        gist_id: String,

        /// Filename inside the gist
        #[arg(long, default_value = "ordem-backup.json")]
        filename: String,

        /// Access token; omit to keep using ORDEM_GIST_TOKEN
        #[arg(long)]
        token: Option<String>,
    },
    /// Push the current snapshot to the gist
    Push,
    /// Pull the snapshot from the gist and import it
    Pull,
    /// Check that the gist is reachable
    Test,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed => commands::seed::run(&cli.data_file)?,
        Commands::Status => commands::status::run(&cli.data_file)?,
        Commands::Export { output } => commands::export::run(&cli.data_file, &output).await?,
        Commands::Import { file } => commands::import::run(&cli.data_file, &file).await?,
        Commands::Backup { action } => match action {
            BackupAction::Configure {
                gist_id,
                filename,
                token,
            } => commands::backup::configure(&cli.data_file, gist_id, filename, token)?,
            BackupAction::Push => commands::backup::push(&cli.data_file).await?,
            BackupAction::Pull => commands::backup::pull(&cli.data_file).await?,
            BackupAction::Test => commands::backup::test(&cli.data_file).await?,
        },
    }
    Ok(())
}
