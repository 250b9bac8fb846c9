//! Numeric-text value generators.

use rand::Rng;

/// Exclusive upper bound of the integer part of a decimal value.
pub const DECIMAL_INTEGER_BOUND: u64 = 100_000_000_000_000_000;

/// Exclusive upper bound of the fractional part of a decimal value.
pub const DECIMAL_FRACTION_BOUND: u32 = 100;

/// Generate a `"<int>.<int>"` decimal string.
///
/// The fractional part is printed without zero padding, so `"12.5"` and
/// `"12.05"` are both possible shapes.
pub fn random_decimal_string<R: Rng>(rng: &mut R) -> String {
    let integer = rng.random_range(0..DECIMAL_INTEGER_BOUND);
    let fraction = rng.random_range(0..DECIMAL_FRACTION_BOUND);
    format!("{integer}.{fraction}")
}
