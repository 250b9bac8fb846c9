//! Run configuration for a populate operation.
//!
//! Every value has a default matching the classic fixture build (100 000
//! rows per table written to `~/Databases/72mb.sqlite` with journaling and
//! synchronous writes disabled). A YAML file can override any subset of
//! keys, and CLI flags override the file.

use crate::error::ConfigError;
use benchgen_generator::row::COLUMN_COUNT;
use benchgen_generator::{AddressLength, PoolConfig, DEFAULT_CHANNEL_MULTIPLIER};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Benchmark tables, in population order.
pub const BENCHMARK_TABLES: [&str; 5] = ["uniques", "updates", "hundred", "tenpct", "tiny"];

/// Directory under the user's home that holds the default target file.
pub const DEFAULT_OUTPUT_DIR: &str = "Databases";

/// File name of the default target file.
pub const DEFAULT_FILE_NAME: &str = "72mb.sqlite";

/// 100 000 rows per table yields a file of roughly 72 MB.
pub const DEFAULT_ROWS_PER_TABLE: u64 = 100_000;

/// Default number of rows bound into one INSERT execution.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Largest number of `?` parameters SQLite accepts in one statement.
pub const MAX_BOUND_PARAMETERS: usize = 32_766;

/// SQLite `journal_mode` setting.
///
/// # Invariants
/// - Values map 1:1 to `SQLite` `journal_mode` pragma settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum JournalMode {
    /// No rollback journal; a crash mid-write can corrupt the file.
    #[default]
    Off,
    /// Write-ahead log.
    Wal,
    /// Rollback journal deleted at the end of each transaction.
    Delete,
    /// Rollback journal truncated instead of deleted.
    Truncate,
    /// Rollback journal kept in memory.
    Memory,
}

impl JournalMode {
    /// Returns the `SQLite` pragma value.
    pub const fn pragma_value(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Wal => "wal",
            Self::Delete => "delete",
            Self::Truncate => "truncate",
            Self::Memory => "memory",
        }
    }
}

/// SQLite `synchronous` setting.
///
/// # Invariants
/// - Values map 1:1 to `SQLite` `synchronous` pragma settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SynchronousMode {
    /// Hand writes to the OS without syncing.
    #[default]
    Off,
    /// Sync at critical moments only.
    Normal,
    /// Sync on every commit.
    Full,
}

impl SynchronousMode {
    /// Returns the `SQLite` pragma value.
    pub const fn pragma_value(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Normal => "normal",
            Self::Full => "full",
        }
    }
}

/// Journaling strategy combined with the synchronous-write setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct DurabilityMode {
    pub journal: JournalMode,
    pub synchronous: SynchronousMode,
}

impl DurabilityMode {
    /// Journal and synchronous writes both disabled.
    pub const NO_JOURNAL: Self = Self {
        journal: JournalMode::Off,
        synchronous: SynchronousMode::Off,
    };

    /// Write-ahead log with synchronous writes disabled.
    pub const WAL: Self = Self {
        journal: JournalMode::Wal,
        synchronous: SynchronousMode::Off,
    };
}

/// Configuration for one populate run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PopulateConfig {
    /// Target database file; `None` means `~/Databases/72mb.sqlite`.
    pub target_path: Option<PathBuf>,
    /// Rows written to each of the five tables.
    pub rows_per_table: u64,
    /// Number of row producers.
    pub worker_count: usize,
    /// Channel slots per producer.
    pub channel_multiplier: usize,
    /// Rows bound into one INSERT execution.
    pub batch_size: usize,
    pub durability: DurabilityMode,
    /// Address lengths below this are raised to it.
    pub address_min_len: usize,
    /// Exclusive upper bound of the address length draw.
    pub address_max_len: usize,
    /// Base seed for the producer RNGs.
    pub seed: Option<u64>,
}

impl Default for PopulateConfig {
    fn default() -> Self {
        Self {
            target_path: None,
            rows_per_table: DEFAULT_ROWS_PER_TABLE,
            worker_count: num_cpus::get(),
            channel_multiplier: DEFAULT_CHANNEL_MULTIPLIER,
            batch_size: DEFAULT_BATCH_SIZE,
            durability: DurabilityMode::default(),
            address_min_len: AddressLength::CLAMPED.min(),
            address_max_len: AddressLength::CLAMPED.max(),
            seed: None,
        }
    }
}

impl PopulateConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string. Missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Check every value is usable before any file is touched.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows_per_table == 0 {
            return Err(ConfigError::Invalid(
                "rows_per_table must be greater than zero".to_string(),
            ));
        }
        if self.worker_count == 0 {
            return Err(ConfigError::Invalid(
                "worker_count must be greater than zero".to_string(),
            ));
        }
        if self.channel_multiplier == 0 {
            return Err(ConfigError::Invalid(
                "channel_multiplier must be greater than zero".to_string(),
            ));
        }
        if self.batch_size == 0 {
            return Err(ConfigError::Invalid(
                "batch_size must be greater than zero".to_string(),
            ));
        }
        if self.batch_size.saturating_mul(COLUMN_COUNT) > MAX_BOUND_PARAMETERS {
            return Err(ConfigError::Invalid(format!(
                "batch_size {} needs {} bound parameters, SQLite allows at most {}",
                self.batch_size,
                self.batch_size.saturating_mul(COLUMN_COUNT),
                MAX_BOUND_PARAMETERS
            )));
        }
        if self.rows_per_table.checked_mul(BENCHMARK_TABLES.len() as u64).is_none() {
            return Err(ConfigError::Invalid(
                "rows_per_table is too large".to_string(),
            ));
        }
        self.address_length()?;
        Ok(())
    }

    /// Rows needed across all benchmark tables.
    pub fn total_rows(&self) -> u64 {
        self.rows_per_table
            .saturating_mul(BENCHMARK_TABLES.len() as u64)
    }

    /// The target path, falling back to `~/Databases/72mb.sqlite`.
    pub fn resolve_target_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.target_path {
            Some(path) => Ok(path.clone()),
            None => default_target_path(),
        }
    }

    /// Address length bounds for the row generator.
    pub fn address_length(&self) -> Result<AddressLength, ConfigError> {
        AddressLength::new(self.address_min_len, self.address_max_len)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Producer pool settings sized to produce exactly the rows this run needs.
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new(self.worker_count, self.total_rows())
            .with_channel_multiplier(self.channel_multiplier)
            .with_seed(self.seed)
    }
}

/// `<home>/Databases/72mb.sqlite`.
pub fn default_target_path() -> Result<PathBuf, ConfigError> {
    let home = dirs_next::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
    Ok(home.join(DEFAULT_OUTPUT_DIR).join(DEFAULT_FILE_NAME))
}
