//! Synthetic row generation for the benchgen fixture builder.
//!
//! This crate provides the [`RowGenerator`], which produces one benchmark row
//! per call from a caller-supplied random source, and the [`RowProducerPool`],
//! which keeps a bounded channel full of freshly generated rows using one
//! worker per CPU core.
//!
//! # Architecture
//!
//! ```text
//!  worker 0 ─┐
//!  worker 1 ─┤  RowGenerator::generate()
//!     ...    ├──────────────────────────────►  bounded channel  ──► consumer
//!  worker N ─┘   (shared row budget)            (workers × multiplier)
//! ```
//!
//! # Example
//!
//! ```rust
//! use benchgen_generator::{AddressLength, RowGenerator};
//!
//! let generator = RowGenerator::new(AddressLength::CLAMPED);
//! let row = generator.generate(&mut rand::rng());
//! assert_eq!(row.code_str.len(), 10);
//! assert!(row.address_str.len() >= 8);
//! ```

pub mod generator;
pub mod generators;
pub mod producer;
pub mod row;

// Re-exports for convenience
pub use generator::{AddressLength, GeneratorError, RowGenerator};
pub use producer::{PoolConfig, RowProducerPool, RowReceiver, DEFAULT_CHANNEL_MULTIPLIER};
pub use row::Row;
