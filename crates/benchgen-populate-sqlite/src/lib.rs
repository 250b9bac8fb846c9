//! SQLite populator for benchmark fixtures.
//!
//! This crate fills a SQLite file with the five benchmark tables using the
//! producer pool from `benchgen-generator` and a single batch inserter that
//! writes each table inside one transaction.
//!
//! # Example
//!
//! ```ignore
//! use benchgen_populate::PopulateConfig;
//! use benchgen_populate_sqlite::SQLitePopulator;
//!
//! let mut config = PopulateConfig::default();
//! config.target_path = Some("/tmp/bench.sqlite".into());
//! config.rows_per_table = 1000;
//!
//! let metrics = SQLitePopulator::new(config)?.populate().await?;
//! assert_eq!(metrics.rows_inserted(), 5000);
//! ```

pub mod args;
mod error;
pub mod insert;
mod populator;
pub mod schema;
pub mod store;
pub mod verify;

pub use args::{CommonPopulateArgs, SQLitePopulateArgs};
pub use error::{ErrorCategory, SQLitePopulatorError};
pub use insert::{BatchInserter, RowSource, TableMetrics};
pub use populator::{PopulateMetrics, SQLitePopulator};
pub use verify::{verify_row_counts, TableCount};
