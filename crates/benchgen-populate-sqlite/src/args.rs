//! CLI argument definitions for the SQLite populator.

use benchgen_populate::{ConfigError, JournalMode, PopulateConfig, SynchronousMode};
use clap::Args;
use std::path::PathBuf;

// Re-export CommonPopulateArgs for convenience
pub use benchgen_populate::CommonPopulateArgs;

/// SQLite-specific populate arguments.
#[derive(Args, Clone, Debug)]
pub struct SQLitePopulateArgs {
    /// Target database file (default: ~/Databases/72mb.sqlite). Deleted if it exists.
    #[arg(long, short = 'o', env = "BENCHGEN_OUTPUT")]
    pub output: Option<PathBuf>,

    /// SQLite journal mode
    #[arg(long, value_enum)]
    pub journal_mode: Option<JournalMode>,

    /// SQLite synchronous mode
    #[arg(long, value_enum)]
    pub synchronous: Option<SynchronousMode>,

    /// Read back row counts after populating and fail on mismatch
    #[arg(long)]
    pub verify: bool,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}

impl SQLitePopulateArgs {
    /// Build the run configuration from the config file and every flag.
    pub fn to_config(&self) -> Result<PopulateConfig, ConfigError> {
        let mut config = self.common.load_config()?;
        if let Some(output) = &self.output {
            config.target_path = Some(output.clone());
        }
        if let Some(journal) = self.journal_mode {
            config.durability.journal = journal;
        }
        if let Some(synchronous) = self.synchronous {
            config.durability.synchronous = synchronous;
        }
        Ok(config)
    }
}
