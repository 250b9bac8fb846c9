//! Common types and utilities for benchgen populators.
//!
//! This crate provides the run configuration ([`PopulateConfig`]), the
//! durability settings shared by storage backends, and the CLI arguments
//! that override configuration values.

pub mod args;
pub mod config;
mod error;

pub use args::CommonPopulateArgs;
pub use config::{
    default_target_path, DurabilityMode, JournalMode, PopulateConfig, SynchronousMode,
    BENCHMARK_TABLES, DEFAULT_BATCH_SIZE, DEFAULT_FILE_NAME, DEFAULT_OUTPUT_DIR,
    DEFAULT_ROWS_PER_TABLE, MAX_BOUND_PARAMETERS,
};
pub use error::ConfigError;
