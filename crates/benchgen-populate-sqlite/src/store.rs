//! Target file preparation and SQLite store setup.

use crate::error::SQLitePopulatorError;
use crate::schema::{generate_create_table, BENCHMARK_TABLES};
use benchgen_populate::DurabilityMode;
use rusqlite::{Connection, OpenFlags};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Files SQLite may leave next to a database.
const SIDECAR_SUFFIXES: [&str; 3] = ["-wal", "-shm", "-journal"];

/// Make `path` ready for a fresh database.
///
/// Any existing file at `path` is deleted without confirmation, along with
/// its WAL, shared-memory and rollback-journal sidecars, so data from a
/// previous run can never survive. Missing parent directories are created.
pub fn prepare_target(path: &Path) -> Result<(), SQLitePopulatorError> {
    if path.is_dir() {
        return Err(SQLitePopulatorError::TargetIsDirectory(path.to_path_buf()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SQLitePopulatorError::CreateParentDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut candidates = vec![path.to_path_buf()];
    candidates.extend(SIDECAR_SUFFIXES.iter().map(|suffix| with_suffix(path, suffix)));

    for candidate in candidates {
        match fs::remove_file(&candidate) {
            Ok(()) => warn!("{}", describe_removal(path, &candidate)),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(source) => {
                return Err(SQLitePopulatorError::RemoveExisting {
                    path: candidate,
                    source,
                })
            }
        }
    }

    Ok(())
}

/// Log line for a file deleted by [`prepare_target`].
fn describe_removal(target: &Path, removed: &Path) -> String {
    if removed == target {
        format!(
            "A SQLite database appears to be there already... removed '{}'",
            removed.display()
        )
    } else {
        format!(
            "Removed leftover SQLite sidecar file '{}'",
            removed.display()
        )
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Open the database at `path`, creating it if absent.
pub fn open_or_create_store(path: &Path) -> Result<Connection, SQLitePopulatorError> {
    info!("Creating new SQLite database file '{}'", path.display());
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE;
    Connection::open_with_flags(path, flags).map_err(|source| SQLitePopulatorError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Open an existing database read-only.
pub fn open_existing(path: &Path) -> Result<Connection, SQLitePopulatorError> {
    Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(|source| {
        SQLitePopulatorError::Open {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Apply the journal and synchronous pragmas.
///
/// `journal_mode` answers with the mode actually in effect; a different
/// answer is reported as [`SQLitePopulatorError::JournalModeRejected`].
pub fn apply_durability_mode(
    connection: &Connection,
    mode: DurabilityMode,
) -> Result<(), SQLitePopulatorError> {
    let requested = mode.journal.pragma_value();
    let actual: String = connection
        .query_row(&format!("PRAGMA journal_mode = {requested}"), [], |row| {
            row.get(0)
        })
        .map_err(|source| SQLitePopulatorError::Pragma {
            pragma: "journal_mode",
            source,
        })?;
    if !actual.eq_ignore_ascii_case(requested) {
        return Err(SQLitePopulatorError::JournalModeRejected { requested, actual });
    }

    connection
        .execute_batch(&format!(
            "PRAGMA synchronous = {};",
            mode.synchronous.pragma_value()
        ))
        .map_err(|source| SQLitePopulatorError::Pragma {
            pragma: "synchronous",
            source,
        })?;

    debug!(
        "Applied journal_mode={} synchronous={}",
        requested,
        mode.synchronous.pragma_value()
    );
    Ok(())
}

/// Create one benchmark table if it does not exist yet.
pub fn create_table_if_absent(
    connection: &Connection,
    table: &str,
) -> Result<(), SQLitePopulatorError> {
    let sql = generate_create_table(table);
    debug!("DDL: {}", sql);
    connection
        .execute_batch(&sql)
        .map_err(|source| SQLitePopulatorError::CreateTable {
            table: table.to_string(),
            source,
        })
}

/// Create all five benchmark tables.
pub fn create_benchmark_tables(connection: &Connection) -> Result<(), SQLitePopulatorError> {
    info!("Creating tables");
    for table in BENCHMARK_TABLES {
        create_table_if_absent(connection, table)?;
    }
    Ok(())
}

/// Get the row count for a table.
pub fn row_count(connection: &Connection, table: &str) -> Result<u64, SQLitePopulatorError> {
    let sql = format!("SELECT COUNT(*) FROM \"{table}\"");
    let count: i64 = connection
        .query_row(&sql, [], |row| row.get(0))
        .map_err(|source| SQLitePopulatorError::RowCount {
            table: table.to_string(),
            source,
        })?;
    Ok(count as u64)
}
