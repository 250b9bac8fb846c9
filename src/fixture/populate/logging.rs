//! Logging utilities for the populate handler.

use benchgen_populate::PopulateConfig;
use std::path::Path;

/// One-line summary of what a populate run is about to do.
pub fn describe_plan(config: &PopulateConfig, target: &Path) -> String {
    let seed = match config.seed {
        Some(seed) => seed.to_string(),
        None => "random".to_string(),
    };
    format!(
        "Populating '{}' with {} rows per table (batch size: {}, workers: {}, \
         journal_mode: {}, synchronous: {}, address length: {}..{}, seed: {})",
        target.display(),
        config.rows_per_table,
        config.batch_size,
        config.worker_count,
        config.durability.journal.pragma_value(),
        config.durability.synchronous.pragma_value(),
        config.address_min_len,
        config.address_max_len,
        seed
    )
}
