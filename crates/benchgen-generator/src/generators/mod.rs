//! Individual value generators for the benchmark row fields.
//!
//! Every function here takes the random source by mutable reference and
//! never fails, so callers can drive them from any thread with its own RNG.

pub mod numeric;
pub mod pattern;
pub mod text;

pub use numeric::random_decimal_string;
pub use pattern::random_date_digits;
pub use text::{random_alphanumeric, ALPHANUMERIC};
