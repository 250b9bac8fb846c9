//! Command-line interface for benchgen
//!
//! # Usage Examples
//!
//! ## Populate
//! ```bash
//! # Default fixture: ~/Databases/72mb.sqlite, 100000 rows per table
//! benchgen populate
//!
//! # Settings from a YAML file, overridden by flags
//! benchgen populate --config bench.yaml --row-count 5000 --journal-mode wal
//!
//! # Print the plan without touching the filesystem
//! benchgen populate --output /tmp/bench.sqlite --dry-run
//! ```
//!
//! ## Verify
//! ```bash
//! benchgen verify --output /tmp/bench.sqlite --row-count 5000
//! ```
//!
//! ## Exit Codes
//! - 0: success
//! - 1: any other failure
//! - 2: invalid configuration
//! - 3: environment (home directory, removing the old file)
//! - 4: SQLite storage failure
//! - 5: producer/consumer pipeline failure
//! - 6: row count mismatch on verification

use benchgen::exit_code_for;
use benchgen::fixture::populate::run_populate;
use benchgen::fixture::verify::{run_verify, VerifyArgs};
use benchgen_populate_sqlite::SQLitePopulateArgs;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "benchgen")]
#[command(about = "A tool for generating SQLite benchmark fixture databases")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a fresh fixture database, deleting any existing file at the target
    Populate {
        #[command(flatten)]
        args: SQLitePopulateArgs,
    },

    /// Check row counts of an existing fixture database
    Verify {
        #[command(flatten)]
        args: VerifyArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code_for(&e));
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Populate { args } => {
            if let Some(metrics) = run_populate(args).await? {
                tracing::info!(
                    "Populated {} rows in {:?} ({:.0} rows/s, {} statement executions, {} bytes on disk)",
                    metrics.rows_inserted(),
                    metrics.total_duration,
                    metrics.rows_per_second(),
                    metrics.statement_executions(),
                    metrics.file_size_bytes
                );
            }
        }
        Commands::Verify { args } => {
            let counts = run_verify(args).await?;
            tracing::info!("Verified {} tables", counts.len());
        }
    }

    Ok(())
}
