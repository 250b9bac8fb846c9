//! Populate command runner.

use anyhow::Context;
use benchgen_populate_sqlite::schema::BENCHMARK_TABLES;
use benchgen_populate_sqlite::{
    verify_row_counts, PopulateMetrics, SQLitePopulateArgs, SQLitePopulator,
};

use super::describe_plan;

/// Run populate command to build a fresh fixture database.
///
/// Returns `None` in dry-run mode, where nothing on disk is touched.
pub async fn run_populate(args: SQLitePopulateArgs) -> anyhow::Result<Option<PopulateMetrics>> {
    let config = args
        .to_config()
        .context("Failed to load populate configuration")?;
    let populator = SQLitePopulator::new(config).context("Invalid populate configuration")?;
    let target = populator.target_path().to_path_buf();
    let rows_per_table = populator.config().rows_per_table;

    if args.common.dry_run {
        tracing::info!("[DRY-RUN] {}", describe_plan(populator.config(), &target));
        tracing::info!("[DRY-RUN] Tables: {:?}", BENCHMARK_TABLES);
        tracing::info!("[DRY-RUN] Configuration validated successfully");
        return Ok(None);
    }

    tracing::info!("{}", describe_plan(populator.config(), &target));

    let metrics = populator
        .populate()
        .await
        .with_context(|| format!("Failed to populate '{}'", target.display()))?;

    for table in &metrics.tables {
        tracing::info!(
            "{}: {} rows, {} statement executions, {:?}",
            table.table,
            table.rows_inserted,
            table.statement_executions,
            table.duration
        );
    }

    if args.verify {
        verify_row_counts(&target, rows_per_table)
            .with_context(|| format!("Verification of '{}' failed", target.display()))?;
    }

    Ok(Some(metrics))
}
