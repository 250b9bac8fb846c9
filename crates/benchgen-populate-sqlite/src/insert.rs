//! Batched INSERT logic for SQLite population.
//!
//! Each table is written inside one transaction through a prepared
//! statement holding `batch_size` value tuples. Every execution drains
//! exactly `batch_size` rows from the [`RowSource`] and binds them in
//! arrival order. A row count that is not a multiple of the batch size is
//! finished with one shorter statement.

use crate::error::SQLitePopulatorError;
use crate::schema::{column_list, COLUMNS};
use benchgen_generator::{Row, RowReceiver};
use rusqlite::{Connection, DropBehavior, Statement, Transaction};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Log progress every this many statement executions.
const PROGRESS_INTERVAL: u64 = 1000;

/// Blocking source of rows for the inserter.
pub trait RowSource {
    /// Next row, or `None` once the source is exhausted.
    fn next_row(&mut self) -> Option<Row>;
}

impl RowSource for RowReceiver {
    fn next_row(&mut self) -> Option<Row> {
        self.blocking_recv()
    }
}

impl RowSource for std::vec::IntoIter<Row> {
    fn next_row(&mut self) -> Option<Row> {
        self.next()
    }
}

/// Metrics from populating one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableMetrics {
    pub table: String,
    /// Rows committed.
    pub rows_inserted: u64,
    /// INSERT statement executions, including a final short batch.
    pub statement_executions: u64,
    pub duration: Duration,
}

/// Build an INSERT statement with `tuples` parameter groups.
pub fn generate_insert(table: &str, tuples: usize) -> String {
    let row_template = format!("({})", vec!["?"; COLUMNS.len()].join(", "));
    let values = vec![row_template.as_str(); tuples].join(", ");
    format!(
        "INSERT INTO \"{table}\" ({}) VALUES {values}",
        column_list()
    )
}

/// Bind one row into tuple slot `tuple` of a prepared batch statement.
pub fn bind_row(stmt: &mut Statement<'_>, tuple: usize, row: &Row) -> rusqlite::Result<()> {
    let base = tuple * COLUMNS.len();
    stmt.raw_bind_parameter(base + 1, row.key)?;
    stmt.raw_bind_parameter(base + 2, row.int_val)?;
    stmt.raw_bind_parameter(base + 3, row.signed_val)?;
    stmt.raw_bind_parameter(base + 4, row.float_val)?;
    stmt.raw_bind_parameter(base + 5, row.double_val)?;
    stmt.raw_bind_parameter(base + 6, row.decimal_str.as_str())?;
    stmt.raw_bind_parameter(base + 7, row.date_str.as_str())?;
    stmt.raw_bind_parameter(base + 8, row.code_str.as_str())?;
    stmt.raw_bind_parameter(base + 9, row.name_str.as_str())?;
    stmt.raw_bind_parameter(base + 10, row.address_str.as_str())?;
    Ok(())
}

/// Single consumer writing each table in its own transaction.
#[derive(Debug, Clone, Copy)]
pub struct BatchInserter {
    batch_size: usize,
}

impl BatchInserter {
    /// Create an inserter binding `batch_size` rows per execution (at least one).
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    /// Rows bound into one full execution.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Statement executions needed for `rows` rows.
    pub fn executions_for(&self, rows: u64) -> u64 {
        let batch = self.batch_size as u64;
        rows / batch + u64::from(rows % batch != 0)
    }

    /// Write `rows` rows from `source` into `table` and commit.
    ///
    /// On any error the transaction is rolled back before the error is
    /// returned; nothing from this table is committed.
    pub fn insert_table<S: RowSource>(
        &self,
        connection: &mut Connection,
        table: &str,
        rows: u64,
        source: &mut S,
    ) -> Result<TableMetrics, SQLitePopulatorError> {
        let start = Instant::now();
        info!(
            "Populating table '{}' with {} rows in {} executions (batch size: {})",
            table,
            rows,
            self.executions_for(rows),
            self.batch_size
        );

        let mut tx = connection
            .transaction()
            .map_err(|source| SQLitePopulatorError::Begin {
                table: table.to_string(),
                source,
            })?;
        tx.set_drop_behavior(DropBehavior::Rollback);

        let statement_executions = match self.write_rows(&tx, table, rows, source) {
            Ok(executions) => executions,
            Err(e) => {
                if let Err(rollback_err) = tx.rollback() {
                    warn!("Rollback of table '{}' failed: {}", table, rollback_err);
                }
                return Err(e);
            }
        };

        tx.commit().map_err(|source| SQLitePopulatorError::Commit {
            table: table.to_string(),
            source,
        })?;

        let metrics = TableMetrics {
            table: table.to_string(),
            rows_inserted: rows,
            statement_executions,
            duration: start.elapsed(),
        };
        info!(
            "Populated {}: {} rows in {:?} ({} executions)",
            table, metrics.rows_inserted, metrics.duration, metrics.statement_executions
        );
        Ok(metrics)
    }

    /// Run all executions for one table inside `tx`. Returns the execution count.
    fn write_rows<S: RowSource>(
        &self,
        tx: &Transaction<'_>,
        table: &str,
        rows: u64,
        source: &mut S,
    ) -> Result<u64, SQLitePopulatorError> {
        let full_batches = rows / self.batch_size as u64;
        let remainder = (rows % self.batch_size as u64) as usize;

        let mut batch = BatchState {
            table,
            expected: rows,
            received: 0,
            executions: 0,
        };

        if full_batches > 0 {
            let mut stmt = batch.prepare(tx, self.batch_size)?;
            for _ in 0..full_batches {
                batch.drain_and_execute(&mut stmt, self.batch_size, source)?;
                if batch.executions % PROGRESS_INTERVAL == 0 {
                    debug!(
                        "Table '{}': {} of {} rows written",
                        table, batch.received, rows
                    );
                }
            }
            batch.finalize(stmt)?;
        }

        if remainder > 0 {
            let mut stmt = batch.prepare(tx, remainder)?;
            batch.drain_and_execute(&mut stmt, remainder, source)?;
            batch.finalize(stmt)?;
        }

        Ok(batch.executions)
    }
}

/// Progress of one table's insert loop.
struct BatchState<'a> {
    table: &'a str,
    expected: u64,
    received: u64,
    executions: u64,
}

impl BatchState<'_> {
    fn prepare<'tx>(
        &self,
        tx: &'tx Transaction<'_>,
        tuples: usize,
    ) -> Result<Statement<'tx>, SQLitePopulatorError> {
        tx.prepare(&generate_insert(self.table, tuples))
            .map_err(|source| SQLitePopulatorError::Prepare {
                table: self.table.to_string(),
                source,
            })
    }

    fn drain_and_execute<S: RowSource>(
        &mut self,
        stmt: &mut Statement<'_>,
        tuples: usize,
        source: &mut S,
    ) -> Result<(), SQLitePopulatorError> {
        for tuple in 0..tuples {
            let row = source
                .next_row()
                .ok_or_else(|| SQLitePopulatorError::ChannelClosed {
                    table: self.table.to_string(),
                    received: self.received,
                    expected: self.expected,
                })?;
            bind_row(stmt, tuple, &row).map_err(|e| self.execute_error(e))?;
            self.received += 1;
        }

        stmt.raw_execute().map_err(|e| self.execute_error(e))?;
        self.executions += 1;
        Ok(())
    }

    fn finalize(&self, stmt: Statement<'_>) -> Result<(), SQLitePopulatorError> {
        stmt.finalize().map_err(|source| SQLitePopulatorError::Finalize {
            table: self.table.to_string(),
            source,
        })
    }

    fn execute_error(&self, source: rusqlite::Error) -> SQLitePopulatorError {
        SQLitePopulatorError::Execute {
            table: self.table.to_string(),
            source,
        }
    }
}
