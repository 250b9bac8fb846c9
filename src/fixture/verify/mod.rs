//! Verify command handler.

use anyhow::Context;
use benchgen_populate::{default_target_path, DEFAULT_ROWS_PER_TABLE};
use benchgen_populate_sqlite::{verify_row_counts, TableCount};
use clap::Args;
use std::path::PathBuf;

/// Arguments for checking an existing fixture database.
#[derive(Args, Clone, Debug)]
pub struct VerifyArgs {
    /// Database file to check (default: ~/Databases/72mb.sqlite)
    #[arg(long, short = 'o', env = "BENCHGEN_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Expected number of rows in every table
    #[arg(long, default_value_t = DEFAULT_ROWS_PER_TABLE)]
    pub row_count: u64,
}

/// Run verify command to read back row counts from every benchmark table.
pub async fn run_verify(args: VerifyArgs) -> anyhow::Result<Vec<TableCount>> {
    let path = match args.output {
        Some(path) => path,
        None => default_target_path().context("Failed to resolve default database path")?,
    };

    tracing::info!(
        "Verifying '{}' holds {} rows per table",
        path.display(),
        args.row_count
    );

    let counts = tokio::task::spawn_blocking(move || verify_row_counts(&path, args.row_count))
        .await
        .context("Verify task failed")??;

    for count in &counts {
        tracing::info!("{}: {} rows", count.table, count.rows);
    }

    Ok(counts)
}
