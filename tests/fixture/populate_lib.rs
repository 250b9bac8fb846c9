//! End-to-end populate runs through the library entry point.

use crate::helpers::{
    address_length_range, count_rows, fixture_path, init_tracing, open_read_only, populate_args,
    table_counts,
};
use benchgen::fixture::populate::run_populate;
use benchgen_populate::JournalMode;
use benchgen_populate_sqlite::schema::{BENCHMARK_TABLES, COLUMNS};
use tempfile::TempDir;

#[tokio::test]
async fn test_populate_small_scale() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let temp_dir = TempDir::new()?;
    let path = fixture_path(&temp_dir, "bench.sqlite");

    let metrics = run_populate(populate_args(&path, 100, 10))
        .await?
        .expect("populate should not be a dry run");

    assert_eq!(metrics.rows_inserted(), 500);
    assert_eq!(metrics.tables.len(), 5);
    for table in &metrics.tables {
        assert_eq!(table.rows_inserted, 100);
        assert_eq!(table.statement_executions, 10);
    }

    let counts = table_counts(&path);
    let names: Vec<&str> = counts.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(names, BENCHMARK_TABLES);
    assert!(counts.iter().all(|(_, rows)| *rows == 100));

    Ok(())
}

#[tokio::test]
async fn test_schema_matches_column_list() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let temp_dir = TempDir::new()?;
    let path = fixture_path(&temp_dir, "bench.sqlite");

    run_populate(populate_args(&path, 20, 10)).await?;

    let conn = open_read_only(&path);
    for table in BENCHMARK_TABLES {
        let mut stmt = conn.prepare(&format!("PRAGMA table_info(\"{table}\")"))?;
        let columns: Vec<(String, String, i64)> = stmt
            .query_map([], |row| Ok((row.get(1)?, row.get(2)?, row.get(3)?)))?
            .collect::<Result<_, _>>()?;

        assert_eq!(columns.len(), COLUMNS.len(), "column count of {table}");
        for ((name, decl_type, notnull), (expected_name, expected_type)) in
            columns.iter().zip(COLUMNS.iter())
        {
            assert_eq!(name, expected_name);
            assert_eq!(decl_type, expected_type);
            assert_eq!(*notnull, 1, "{table}.{name} should be NOT NULL");
        }
    }

    Ok(())
}

#[tokio::test]
async fn test_stored_values_have_expected_shape() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let temp_dir = TempDir::new()?;
    let path = fixture_path(&temp_dir, "bench.sqlite");

    run_populate(populate_args(&path, 200, 25)).await?;

    let conn = open_read_only(&path);
    for table in BENCHMARK_TABLES {
        let nulls: i64 = conn.query_row(
            &format!(
                "SELECT COUNT(*) FROM \"{table}\" WHERE col_key IS NULL OR col_int IS NULL \
                 OR col_signed IS NULL OR col_float IS NULL OR col_double IS NULL \
                 OR col_decim IS NULL OR col_date IS NULL OR col_code IS NULL \
                 OR col_name IS NULL OR col_address IS NULL"
            ),
            [],
            |row| row.get(0),
        )?;
        assert_eq!(nulls, 0, "{table} has NULL values");

        let bad_text: i64 = conn.query_row(
            &format!(
                "SELECT COUNT(*) FROM \"{table}\" WHERE LENGTH(col_code) != 10 \
                 OR LENGTH(col_name) != 20 \
                 OR col_code GLOB '*[^a-z0-9]*' OR col_name GLOB '*[^a-z0-9]*' \
                 OR col_address GLOB '*[^a-z0-9]*' \
                 OR col_date NOT GLOB '[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9]'"
            ),
            [],
            |row| row.get(0),
        )?;
        assert_eq!(bad_text, 0, "{table} has malformed text values");

        let out_of_range: i64 = conn.query_row(
            &format!(
                "SELECT COUNT(*) FROM \"{table}\" WHERE col_float < 0 OR col_float >= 1 \
                 OR col_double < 0 OR col_double >= 1"
            ),
            [],
            |row| row.get(0),
        )?;
        assert_eq!(out_of_range, 0, "{table} has floats outside [0, 1)");
    }

    Ok(())
}

#[tokio::test]
async fn test_second_run_replaces_file() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let temp_dir = TempDir::new()?;
    let path = fixture_path(&temp_dir, "bench.sqlite");

    let first_names = |path: &std::path::Path| -> Vec<String> {
        let conn = open_read_only(path);
        let mut stmt = conn
            .prepare("SELECT col_name FROM uniques ORDER BY rowid LIMIT 10")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap()
    };

    run_populate(populate_args(&path, 50, 10)).await?;
    let before = first_names(&path);

    run_populate(populate_args(&path, 50, 10)).await?;
    let after = first_names(&path);

    let conn = open_read_only(&path);
    for table in BENCHMARK_TABLES {
        assert_eq!(count_rows(&conn, table), 50, "{table} accumulated rows");
    }
    assert_ne!(before, after);

    Ok(())
}

#[tokio::test]
async fn test_uneven_batches_write_full_quota() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let temp_dir = TempDir::new()?;
    let path = fixture_path(&temp_dir, "bench.sqlite");

    let metrics = run_populate(populate_args(&path, 47, 10))
        .await?
        .expect("populate should not be a dry run");

    for table in &metrics.tables {
        assert_eq!(table.rows_inserted, 47);
        assert_eq!(table.statement_executions, 5);
    }
    assert!(table_counts(&path).iter().all(|(_, rows)| *rows == 47));

    Ok(())
}

#[tokio::test]
async fn test_single_row_inserts() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let temp_dir = TempDir::new()?;
    let path = fixture_path(&temp_dir, "bench.sqlite");

    let metrics = run_populate(populate_args(&path, 30, 1))
        .await?
        .expect("populate should not be a dry run");

    assert_eq!(metrics.statement_executions(), 150);
    assert!(table_counts(&path).iter().all(|(_, rows)| *rows == 30));

    Ok(())
}

#[tokio::test]
async fn test_clamped_address_lengths() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let temp_dir = TempDir::new()?;
    let path = fixture_path(&temp_dir, "bench.sqlite");

    run_populate(populate_args(&path, 400, 50)).await?;

    let (min, max) = address_length_range(&path);
    assert!(min >= 8, "shortest address is {min}");
    assert!(max < 80, "longest address is {max}");

    Ok(())
}

#[tokio::test]
async fn test_unclamped_address_lengths() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let temp_dir = TempDir::new()?;
    let path = fixture_path(&temp_dir, "bench.sqlite");

    let mut args = populate_args(&path, 400, 50);
    args.common.address_min_len = Some(0);
    run_populate(args).await?;

    let (min, max) = address_length_range(&path);
    assert!(min < 8, "no address shorter than 8 in 2000 rows");
    assert!(max < 80, "longest address is {max}");

    Ok(())
}

#[tokio::test]
async fn test_wal_durability_mode() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let temp_dir = TempDir::new()?;
    let path = fixture_path(&temp_dir, "bench.sqlite");

    let mut args = populate_args(&path, 40, 10);
    args.journal_mode = Some(JournalMode::Wal);
    args.verify = true;
    run_populate(args).await?;

    let conn = open_read_only(&path);
    let mode: String = conn.query_row("PRAGMA journal_mode", [], |row| row.get(0))?;
    assert_eq!(mode.to_lowercase(), "wal");
    for table in BENCHMARK_TABLES {
        assert_eq!(count_rows(&conn, table), 40);
    }

    Ok(())
}

#[tokio::test]
async fn test_dry_run_touches_nothing() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let temp_dir = TempDir::new()?;
    let path = fixture_path(&temp_dir, "nested/bench.sqlite");

    let mut args = populate_args(&path, 100, 10);
    args.common.dry_run = true;

    assert!(run_populate(args).await?.is_none());
    assert!(!path.exists());
    assert!(!temp_dir.path().join("nested").exists());

    Ok(())
}

#[tokio::test]
async fn test_config_file_with_flag_override() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let temp_dir = TempDir::new()?;
    let path = fixture_path(&temp_dir, "bench.sqlite");
    let config_path = fixture_path(&temp_dir, "bench.yaml");
    std::fs::write(
        &config_path,
        "rows_per_table: 12\nbatch_size: 4\nworker_count: 2\nseed: 9\n",
    )?;

    let mut args = populate_args(&path, 0, 0);
    args.common = benchgen_populate_sqlite::CommonPopulateArgs {
        config: Some(config_path),
        row_count: Some(16),
        ..Default::default()
    };

    let metrics = run_populate(args)
        .await?
        .expect("populate should not be a dry run");

    // row_count comes from the flag, batch_size from the file
    assert_eq!(metrics.rows_inserted(), 80);
    assert_eq!(metrics.statement_executions(), 20);

    Ok(())
}
