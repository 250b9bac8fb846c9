//! benchgen library
//!
//! Builds SQLite benchmark fixture databases: five identically shaped tables
//! (`uniques`, `updates`, `hundred`, `tenpct`, `tiny`) filled with random
//! rows by a pool of generator workers and a single batching inserter.
//!
//! # Crates
//!
//! - `benchgen_generator` - row generation and the producer pool
//! - `benchgen_populate` - run configuration and shared CLI arguments
//! - `benchgen_populate_sqlite` - storage setup, batch inserts, verification
//!
//! # CLI Usage
//!
//! ```bash
//! # Default run: 100000 rows per table into ~/Databases/72mb.sqlite
//! benchgen populate
//!
//! # Small WAL-mode fixture with single-row inserts, checked afterwards
//! benchgen populate --output /tmp/bench.sqlite --row-count 1000 \
//!   --batch-size 1 --journal-mode wal --verify
//!
//! # Check an existing fixture
//! benchgen verify --output /tmp/bench.sqlite --row-count 1000
//! ```

pub mod exit_code;
pub mod fixture;

pub use benchgen_generator as generator;
pub use benchgen_populate as populate;
pub use benchgen_populate_sqlite as sqlite;
pub use exit_code::exit_code_for;
