//! Digit-pattern string generator.
//!
//! Patterns use `D` as a placeholder for one random decimal digit; every
//! other character is copied verbatim.

use rand::Rng;

/// Shape of the date column: four, two and two random digits.
pub const DATE_PATTERN: &str = "DDDD-DD-DD";

/// Generate a `"DDDD-DD-DD"`-shaped string of random digits.
///
/// The result looks like an ISO date but is not calendar-valid.
pub fn random_date_digits<R: Rng>(rng: &mut R) -> String {
    generate_digit_pattern(DATE_PATTERN, rng)
}

/// Replace every `D` in `pattern` with a random digit.
pub fn generate_digit_pattern<R: Rng>(pattern: &str, rng: &mut R) -> String {
    pattern
        .chars()
        .map(|c| {
            if c == 'D' {
                char::from(b'0' + rng.random_range(0..10u8))
            } else {
                c
            }
        })
        .collect()
}
