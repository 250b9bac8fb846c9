//! Read-back verification of a populated database.

use crate::error::SQLitePopulatorError;
use crate::schema::BENCHMARK_TABLES;
use crate::store::{open_existing, row_count};
use std::path::Path;
use tracing::{error, info};

/// Row count read back from one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCount {
    pub table: String,
    pub rows: u64,
}

/// Check that every benchmark table in `path` holds exactly `expected` rows.
///
/// Returns the counts when all tables match, otherwise the first mismatch.
pub fn verify_row_counts(
    path: &Path,
    expected: u64,
) -> Result<Vec<TableCount>, SQLitePopulatorError> {
    let connection = open_existing(path)?;

    let mut counts = Vec::with_capacity(BENCHMARK_TABLES.len());
    for table in BENCHMARK_TABLES {
        let rows = row_count(&connection, table)?;
        if rows != expected {
            error!(
                "Table '{}' holds {} rows, expected {}",
                table, rows, expected
            );
            return Err(SQLitePopulatorError::RowCountMismatch {
                table: table.to_string(),
                expected,
                actual: rows,
            });
        }
        counts.push(TableCount {
            table: table.to_string(),
            rows,
        });
    }

    info!(
        "Verified {} tables with {} rows each in '{}'",
        counts.len(),
        expected,
        path.display()
    );
    Ok(counts)
}
