//! Common CLI argument definitions shared by all populators.

use crate::config::PopulateConfig;
use crate::error::ConfigError;
use clap::Args;
use std::path::PathBuf;

/// Common arguments shared by all populators.
///
/// Every value is optional: unset flags keep the value from `--config` (or
/// the built-in default when no file is given).
#[derive(Args, Clone, Debug, Default)]
pub struct CommonPopulateArgs {
    /// Path to a YAML config file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Number of rows to generate per table
    #[arg(long)]
    pub row_count: Option<u64>,

    /// Rows bound into each INSERT statement execution (1 = single-row inserts)
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Number of row generator workers (default: number of CPU cores)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Row channel slots per worker
    #[arg(long)]
    pub channel_multiplier: Option<usize>,

    /// Minimum address length; shorter draws are raised to it (0 disables clamping)
    #[arg(long)]
    pub address_min_len: Option<usize>,

    /// Exclusive upper bound of the address length draw
    #[arg(long)]
    pub address_max_len: Option<usize>,

    /// Seed each worker RNG for per-worker reproducible rows
    #[arg(long)]
    pub seed: Option<u64>,

    /// Dry-run mode: validate configuration without touching the target file
    #[arg(long)]
    pub dry_run: bool,
}

impl CommonPopulateArgs {
    /// Load the config file (if any) and apply flag overrides on top.
    pub fn load_config(&self) -> Result<PopulateConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => PopulateConfig::from_file(path)?,
            None => PopulateConfig::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// Override config values with every flag that was given.
    pub fn apply(&self, config: &mut PopulateConfig) {
        if let Some(row_count) = self.row_count {
            config.rows_per_table = row_count;
        }
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
        if let Some(workers) = self.workers {
            config.worker_count = workers;
        }
        if let Some(channel_multiplier) = self.channel_multiplier {
            config.channel_multiplier = channel_multiplier;
        }
        if let Some(min) = self.address_min_len {
            config.address_min_len = min;
        }
        if let Some(max) = self.address_max_len {
            config.address_max_len = max;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}
