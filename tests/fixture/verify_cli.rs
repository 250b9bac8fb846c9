//! Verify subcommand through the compiled binary.

use crate::helpers::{assert_cli_success, execute_benchgen, fixture_path, populate_args};
use benchgen::fixture::populate::run_populate;
use tempfile::TempDir;

#[tokio::test]
async fn test_verify_cli_matches_and_mismatches() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = fixture_path(&temp_dir, "bench.sqlite");
    let path_str = path.to_string_lossy().to_string();

    run_populate(populate_args(&path, 25, 5)).await?;

    let output = execute_benchgen(&["verify", "--output", &path_str, "--row-count", "25"]);
    assert_cli_success(&output, "verify");

    let output = execute_benchgen(&["verify", "--output", &path_str, "--row-count", "26"]);
    assert_eq!(output.status.code(), Some(6));
    assert!(String::from_utf8_lossy(&output.stderr).contains("uniques"));

    Ok(())
}

#[test]
fn test_verify_cli_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = fixture_path(&temp_dir, "missing.sqlite");
    let path_str = path.to_string_lossy().to_string();

    let output = execute_benchgen(&["verify", "--output", &path_str, "--row-count", "1"]);

    assert_eq!(output.status.code(), Some(4));
    assert!(!path.exists());

    Ok(())
}
