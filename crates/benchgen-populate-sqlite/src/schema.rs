//! Fixed benchmark table schema.

pub use benchgen_populate::BENCHMARK_TABLES;

/// Column names and SQLite types, in insert order.
pub const COLUMNS: [(&str, &str); 10] = [
    ("col_key", "INTEGER"),
    ("col_int", "INTEGER"),
    ("col_signed", "INTEGER"),
    ("col_float", "REAL"),
    ("col_double", "REAL"),
    ("col_decim", "NUMERIC"),
    ("col_date", "TEXT"),
    ("col_code", "TEXT"),
    ("col_name", "TEXT"),
    ("col_address", "TEXT"),
];

/// Quoted, comma-separated column list.
pub fn column_list() -> String {
    COLUMNS
        .iter()
        .map(|(name, _)| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Generate the CREATE TABLE IF NOT EXISTS statement for a benchmark table.
pub fn generate_create_table(table: &str) -> String {
    let columns = COLUMNS
        .iter()
        .map(|(name, sql_type)| format!("    \"{name}\" {sql_type} NOT NULL"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("CREATE TABLE IF NOT EXISTS \"{table}\" (\n{columns}\n)")
}
