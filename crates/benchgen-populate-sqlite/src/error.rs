//! Error types for the SQLite populator.

use benchgen_generator::GeneratorError;
use benchgen_populate::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Broad failure class, used to pick a process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid or unreadable configuration.
    Config,
    /// Home directory, filesystem or target path problems.
    Environment,
    /// SQLite refused an operation.
    Storage,
    /// Producer pool or insert task failure.
    Pipeline,
    /// Read-back row counts did not match.
    Verification,
}

/// Errors that can occur during SQLite population.
///
/// Every variant names the operation that failed; all of them end the run.
#[derive(Error, Debug)]
pub enum SQLitePopulatorError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The target path points at a directory.
    #[error("Target path {0:?} is a directory")]
    TargetIsDirectory(PathBuf),

    /// An existing database file could not be removed.
    #[error("Failed to remove existing database {path:?}: {source}")]
    RemoveExisting {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory holding the target file could not be created.
    #[error("Failed to create directory {path:?}: {source}")]
    CreateParentDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The database file could not be opened or created.
    #[error("Couldn't open database {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A PRAGMA statement failed.
    #[error("Error when setting PRAGMA {pragma}: {source}")]
    Pragma {
        pragma: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    /// SQLite kept a different journal mode than requested.
    #[error("SQLite reported journal_mode '{actual}' instead of '{requested}'")]
    JournalModeRejected {
        requested: &'static str,
        actual: String,
    },

    /// CREATE TABLE failed.
    #[error("Error when creating table '{table}': {source}")]
    CreateTable {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    /// BEGIN failed.
    #[error("Error beginning transaction for table '{table}': {source}")]
    Begin {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Preparing the INSERT statement failed.
    #[error("Error preparing insert statement for table '{table}': {source}")]
    Prepare {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Binding or executing the INSERT statement failed.
    #[error("Error inserting data into table '{table}': {source}")]
    Execute {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Finalizing the INSERT statement failed.
    #[error("Error finalizing insert statement for table '{table}': {source}")]
    Finalize {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    /// COMMIT failed.
    #[error("Error committing table '{table}': {source}")]
    Commit {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Closing the connection failed.
    #[error("Error closing database: {0}")]
    Close(#[source] rusqlite::Error),

    /// The row channel closed before the table was full.
    #[error("Row channel closed after {received} of {expected} rows for table '{table}'")]
    ChannelClosed {
        table: String,
        received: u64,
        expected: u64,
    },

    /// A row producer failed.
    #[error("Producer error: {0}")]
    Producer(#[from] GeneratorError),

    /// The insert task panicked or was cancelled.
    #[error("Insert task failed: {0}")]
    Task(String),

    /// Counting rows failed.
    #[error("Error counting rows in table '{table}': {source}")]
    RowCount {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A table holds a different number of rows than expected.
    #[error("Table '{table}' holds {actual} rows, expected {expected}")]
    RowCountMismatch {
        table: String,
        expected: u64,
        actual: u64,
    },
}

impl SQLitePopulatorError {
    /// Failure class of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(ConfigError::HomeDirUnavailable) => ErrorCategory::Environment,
            Self::Config(_) => ErrorCategory::Config,
            Self::TargetIsDirectory(_)
            | Self::RemoveExisting { .. }
            | Self::CreateParentDir { .. } => ErrorCategory::Environment,
            Self::Open { .. }
            | Self::Pragma { .. }
            | Self::JournalModeRejected { .. }
            | Self::CreateTable { .. }
            | Self::Begin { .. }
            | Self::Prepare { .. }
            | Self::Execute { .. }
            | Self::Finalize { .. }
            | Self::Commit { .. }
            | Self::Close(_)
            | Self::RowCount { .. } => ErrorCategory::Storage,
            Self::ChannelClosed { .. } | Self::Producer(_) | Self::Task(_) => {
                ErrorCategory::Pipeline
            }
            Self::RowCountMismatch { .. } => ErrorCategory::Verification,
        }
    }
}
