//! Shared helpers for fixture tests.

use benchgen_populate_sqlite::schema::BENCHMARK_TABLES;
use benchgen_populate_sqlite::{CommonPopulateArgs, SQLitePopulateArgs};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("benchgen=info,benchgen_populate_sqlite=info")
        .try_init()
        .ok();
}

/// Populate arguments for a small run into `output`.
pub fn populate_args(output: &Path, rows: u64, batch_size: usize) -> SQLitePopulateArgs {
    SQLitePopulateArgs {
        output: Some(output.to_path_buf()),
        journal_mode: None,
        synchronous: None,
        verify: false,
        common: CommonPopulateArgs {
            row_count: Some(rows),
            batch_size: Some(batch_size),
            workers: Some(4),
            ..Default::default()
        },
    }
}

pub fn open_read_only(path: &Path) -> Connection {
    Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .expect("Failed to open fixture database")
}

pub fn count_rows(conn: &Connection, table: &str) -> u64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM \"{table}\""), [], |row| {
        row.get::<_, i64>(0)
    })
    .map(|n| n as u64)
    .expect("Failed to count rows")
}

pub fn table_counts(path: &Path) -> Vec<(String, u64)> {
    let conn = open_read_only(path);
    BENCHMARK_TABLES
        .iter()
        .map(|table| (table.to_string(), count_rows(&conn, table)))
        .collect()
}

/// Minimum and maximum address length across every table.
pub fn address_length_range(path: &Path) -> (i64, i64) {
    let conn = open_read_only(path);
    let mut min = i64::MAX;
    let mut max = i64::MIN;
    for table in BENCHMARK_TABLES {
        let (lo, hi): (i64, i64) = conn
            .query_row(
                &format!("SELECT MIN(LENGTH(col_address)), MAX(LENGTH(col_address)) FROM \"{table}\""),
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .expect("Failed to read address lengths");
        min = min.min(lo);
        max = max.max(hi);
    }
    (min, max)
}

pub fn execute_benchgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_benchgen"))
        .args(args)
        .env("RUST_LOG", "benchgen=debug")
        .output()
        .expect("Failed to run benchgen")
}

pub fn assert_cli_success(output: &Output, command_desc: &str) {
    if !output.status.success() {
        panic!(
            "{} failed!\nExit code: {:?}\nStdout: {}\nStderr: {}",
            command_desc,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

pub fn fixture_path(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}
