//! The synthetic benchmark row.

/// Number of columns in every benchmark table.
pub const COLUMN_COUNT: usize = 10;

/// One synthetic fixture record.
///
/// Rows carry no identity: `key` is random and is not guaranteed unique,
/// even in the `uniques` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub key: i64,
    pub int_val: i64,
    pub signed_val: i64,
    /// Uniform in `[0, 1)`.
    pub float_val: f32,
    /// Uniform in `[0, 1)`.
    pub double_val: f64,
    /// `"<int>.<int>"` with the integer part below 1e17 and the fraction below 100.
    pub decimal_str: String,
    /// `"DDDD-DD-DD"` made of random digits, not a calendar date.
    pub date_str: String,
    pub code_str: String,
    pub name_str: String,
    pub address_str: String,
}
