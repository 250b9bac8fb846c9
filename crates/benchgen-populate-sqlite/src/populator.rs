//! SQLite populator driving the producer/consumer pipeline.

use crate::error::SQLitePopulatorError;
use crate::insert::{BatchInserter, TableMetrics};
use crate::schema::BENCHMARK_TABLES;
use crate::store::{
    apply_durability_mode, create_benchmark_tables, open_or_create_store, prepare_target,
};
use benchgen_generator::{RowGenerator, RowProducerPool, RowReceiver};
use benchgen_populate::PopulateConfig;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tracing::{debug, info};

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Per-table results, in population order.
    pub tables: Vec<TableMetrics>,
    /// Total time taken, including setup.
    pub total_duration: Duration,
    /// Size of the finished database file.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Rows committed across all tables.
    pub fn rows_inserted(&self) -> u64 {
        self.tables.iter().map(|t| t.rows_inserted).sum()
    }

    /// INSERT executions across all tables.
    pub fn statement_executions(&self) -> u64 {
        self.tables.iter().map(|t| t.statement_executions).sum()
    }

    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_inserted() as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// SQLite populator that generates and inserts benchmark fixtures.
pub struct SQLitePopulator {
    config: PopulateConfig,
    target_path: PathBuf,
}

impl SQLitePopulator {
    /// Validate `config` and resolve the target path.
    ///
    /// Nothing on disk is touched until [`SQLitePopulator::populate`].
    pub fn new(config: PopulateConfig) -> Result<Self, SQLitePopulatorError> {
        config.validate()?;
        let target_path = config.resolve_target_path()?;
        Ok(Self {
            config,
            target_path,
        })
    }

    /// Get the resolved target file.
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &PopulateConfig {
        &self.config
    }

    /// Replace the target file with an empty store holding the five tables.
    pub fn setup(&self) -> Result<Connection, SQLitePopulatorError> {
        prepare_target(&self.target_path)?;
        let connection = open_or_create_store(&self.target_path)?;
        apply_durability_mode(&connection, self.config.durability)?;
        create_benchmark_tables(&connection)?;
        Ok(connection)
    }

    /// Run the whole pipeline: setup, produce, insert every table, shut down.
    ///
    /// The first error ends the run; the table being written at that point
    /// is rolled back and later tables are never started.
    pub async fn populate(self) -> Result<PopulateMetrics, SQLitePopulatorError> {
        let start_time = Instant::now();
        let connection = self.setup()?;
        self.run_pipeline(connection, start_time).await
    }

    /// Produce rows and insert every table into an already prepared store.
    async fn run_pipeline(
        self,
        connection: Connection,
        start_time: Instant,
    ) -> Result<PopulateMetrics, SQLitePopulatorError> {
        let generator = RowGenerator::new(self.config.address_length()?);
        let address_length = generator.address_length();
        debug!(
            "Address length drawn from 0..{} and raised to {}",
            address_length.max(),
            address_length.min()
        );
        let (pool, rx) = RowProducerPool::spawn(generator, &self.config.pool_config());

        info!("Adding data");
        let inserter = BatchInserter::new(self.config.batch_size);
        let rows_per_table = self.config.rows_per_table;
        let insert_result = match spawn_inserter(connection, rx, inserter, rows_per_table) {
            Ok(done) => done.await.unwrap_or_else(|_| {
                Err(SQLitePopulatorError::Task(
                    "insert thread exited without a result".to_string(),
                ))
            }),
            Err(e) => Err(e),
        };

        // The receiver is gone by now, so no worker can stay parked on a send.
        let shutdown_result = pool.shutdown().await;

        let tables = insert_result?;
        shutdown_result?;

        let metrics = PopulateMetrics {
            tables,
            total_duration: start_time.elapsed(),
            file_size_bytes: std::fs::metadata(&self.target_path)
                .map(|m| m.len())
                .unwrap_or(0),
        };

        info!(
            "SQLite database generation completed: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_inserted(),
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}

type InsertResult = Result<Vec<TableMetrics>, SQLitePopulatorError>;

/// Start the consumer on a dedicated OS thread.
///
/// The consumer must never wait for a slot in tokio's blocking pool: with
/// enough producers every slot is taken by a worker parked on a full channel.
fn spawn_inserter(
    connection: Connection,
    rx: RowReceiver,
    inserter: BatchInserter,
    rows_per_table: u64,
) -> Result<oneshot::Receiver<InsertResult>, SQLitePopulatorError> {
    let (done_tx, done_rx) = oneshot::channel();
    thread::Builder::new()
        .name("benchgen-sqlite-inserter".to_string())
        .spawn(move || {
            let result = insert_all_tables(connection, rx, inserter, rows_per_table);
            // Receiver is gone if the populate future was dropped.
            let _ = done_tx.send(result);
        })
        .map_err(|e| SQLitePopulatorError::Task(format!("failed to spawn insert thread: {e}")))?;
    Ok(done_rx)
}

/// Consumer side of the pipeline; owns the connection and the receiver.
fn insert_all_tables(
    mut connection: Connection,
    mut rx: RowReceiver,
    inserter: BatchInserter,
    rows_per_table: u64,
) -> InsertResult {
    let mut tables = Vec::with_capacity(BENCHMARK_TABLES.len());
    for table in BENCHMARK_TABLES {
        tables.push(inserter.insert_table(&mut connection, table, rows_per_table, &mut rx)?);
    }
    drop(rx);

    connection
        .close()
        .map_err(|(_, e)| SQLitePopulatorError::Close(e))?;
    Ok(tables)
}
