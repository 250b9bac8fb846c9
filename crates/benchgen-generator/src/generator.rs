//! Row generator producing one synthetic benchmark row per call.

use crate::generators::{random_alphanumeric, random_date_digits, random_decimal_string};
use crate::row::Row;
use rand::Rng;

/// Length of the `col_code` text column.
pub const CODE_LENGTH: usize = 10;

/// Length of the `col_name` text column.
pub const NAME_LENGTH: usize = 20;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The address length range is empty.
    #[error("address max length must be greater than zero")]
    EmptyAddressRange,

    /// A producer worker panicked or was aborted.
    #[error("Row producer failed: {0}")]
    Worker(String),
}

/// Bounds for the random address length.
///
/// A length is drawn uniformly from `[0, max)` and raised to `min` when the
/// draw falls below it, so short lengths pile up at `min` instead of being
/// redrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressLength {
    min: usize,
    max: usize,
}

impl AddressLength {
    /// Draw in `[0, 80)` and clamp to at least 8.
    pub const CLAMPED: Self = Self { min: 8, max: 80 };

    /// Draw in `[0, 80)` with no clamping; empty addresses are possible.
    pub const UNCLAMPED: Self = Self { min: 0, max: 80 };

    /// Create address bounds with the given clamp minimum and exclusive draw maximum.
    pub fn new(min: usize, max: usize) -> Result<Self, GeneratorError> {
        if max == 0 {
            return Err(GeneratorError::EmptyAddressRange);
        }
        Ok(Self { min, max })
    }

    /// Clamp minimum.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Exclusive upper bound of the draw.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Draw one address length.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        rng.random_range(0..self.max).max(self.min)
    }

    /// Whether `len` is a length this configuration can produce.
    pub fn contains(&self, len: usize) -> bool {
        if self.min >= self.max {
            len == self.min
        } else {
            len >= self.min && len < self.max
        }
    }
}

impl Default for AddressLength {
    fn default() -> Self {
        Self::CLAMPED
    }
}

/// Stateless generator of benchmark rows.
///
/// The generator only holds configuration; all randomness comes from the
/// RNG passed to [`RowGenerator::generate`], so one instance can be cloned
/// into any number of worker threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowGenerator {
    address_length: AddressLength,
}

impl RowGenerator {
    /// Create a new row generator.
    pub fn new(address_length: AddressLength) -> Self {
        Self { address_length }
    }

    /// Get the configured address bounds.
    pub fn address_length(&self) -> AddressLength {
        self.address_length
    }

    /// Generate one row.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Row {
        let address_len = self.address_length.sample(rng);
        Row {
            key: rng.random(),
            int_val: rng.random(),
            signed_val: rng.random(),
            float_val: rng.random(),
            double_val: rng.random(),
            decimal_str: random_decimal_string(rng),
            date_str: random_date_digits(rng),
            code_str: random_alphanumeric(rng, CODE_LENGTH),
            name_str: random_alphanumeric(rng, NAME_LENGTH),
            address_str: random_alphanumeric(rng, address_len),
        }
    }
}
