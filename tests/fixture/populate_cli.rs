//! Populate subcommand through the compiled binary.

use crate::helpers::{assert_cli_success, execute_benchgen, fixture_path, table_counts};
use tempfile::TempDir;

#[test]
fn test_populate_cli_with_verify() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = fixture_path(&temp_dir, "out/bench.sqlite");
    let path_str = path.to_string_lossy().to_string();

    let output = execute_benchgen(&[
        "populate",
        "--output",
        &path_str,
        "--row-count",
        "60",
        "--batch-size",
        "7",
        "--workers",
        "2",
        "--journal-mode",
        "delete",
        "--synchronous",
        "normal",
        "--verify",
    ]);
    assert_cli_success(&output, "populate --verify");

    assert!(table_counts(&path).iter().all(|(_, rows)| *rows == 60));

    Ok(())
}

#[test]
fn test_populate_cli_rejects_oversized_batch() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = fixture_path(&temp_dir, "bench.sqlite");
    let path_str = path.to_string_lossy().to_string();

    // 4000 tuples x 10 columns exceeds SQLite's bound parameter limit
    let output = execute_benchgen(&[
        "populate",
        "--output",
        &path_str,
        "--batch-size",
        "4000",
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error:"));
    assert!(!path.exists());

    Ok(())
}

#[test]
fn test_populate_cli_target_is_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let dir_str = temp_dir.path().to_string_lossy().to_string();

    let output = execute_benchgen(&["populate", "--output", &dir_str, "--row-count", "10"]);

    assert_eq!(output.status.code(), Some(3));

    Ok(())
}

#[test]
fn test_populate_cli_dry_run() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = fixture_path(&temp_dir, "bench.sqlite");
    let path_str = path.to_string_lossy().to_string();

    let output = execute_benchgen(&["populate", "--output", &path_str, "--dry-run"]);
    assert_cli_success(&output, "populate --dry-run");

    assert!(String::from_utf8_lossy(&output.stdout).contains("[DRY-RUN]"));
    assert!(!path.exists());

    Ok(())
}
