//! Integration tests for the partition-gap-checker binary.

use std::fs;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE: &str = "\
events
from_unixtime(PARTITION_DESCRIPTION) PARTITION_DESCRIPTION PARTITION_ORDINAL_POSITION TABLE_ROWS
2025-10-09 00:00:00 1759968000 5 0
2025-10-08 00:00:00 1759881600 4 12
2025-10-05 00:00:00 1759622400 3 40

sessions
from_unixtime(PARTITION_DESCRIPTION) PARTITION_DESCRIPTION PARTITION_ORDINAL_POSITION TABLE_ROWS
2025-10-09 00:00:00 1759968000 3 1250
2025-10-08 00:00:00 1759881600 2 980
2025-10-07 00:00:00 1759795200 1 870
";

fn workspace(input: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("result.txt"), input).unwrap();
    dir
}

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("partition-gap-checker");
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("PARTITION_CHECKER_INPUT")
        .env_remove("PARTITION_CHECKER_TIMEZONE")
        .env_remove("PARTITION_CHECKER_ENGINE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_check_with_gap_succeeds() {
    let dir = workspace(SAMPLE);

    cmd(&dir)
        .args(["--no-color", "--timezone", "utc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 table(s): events, sessions"))
        .stdout(predicate::str::contains("Tables with missing partitions: 1"))
        .stdout(predicate::str::contains("Tables OK: 1"))
        .stdout(predicate::str::contains("Total SQL commands generated: 1"));

    let sql = fs::read_to_string(dir.path().join("partition_fix.sql")).unwrap();
    assert!(sql.contains("REVIEW CAREFULLY BEFORE EXECUTION"));
    assert!(sql.contains("ALTER TABLE events\nREORGANIZE PARTITION p20251008 INTO ("));
    assert!(sql.contains("PARTITION p20251006 VALUES LESS THAN (1759708800) ENGINE = InnoDB,"));
    assert!(sql.contains("PARTITION p20251007 VALUES LESS THAN (1759795200) ENGINE = InnoDB,"));
    assert!(sql.contains("PARTITION p20251008 VALUES LESS THAN (1759881600) ENGINE = InnoDB\n);"));
    assert!(!sql.contains("ALTER TABLE sessions"));

    let analysis = fs::read_to_string(dir.path().join("partition_analysis.txt")).unwrap();
    assert!(analysis.contains("PARTITION ANALYSIS: events"));
    assert!(analysis.contains("PROPOSED SQL COMMANDS FOR: events"));
    assert!(analysis.contains("   - 2025-10-06"));
    assert!(analysis.contains("Source: result.txt"));
}

#[test]
fn test_default_bounds_use_local_time() {
    let dir = workspace(SAMPLE);

    cmd(&dir)
        .env("TZ", "Europe/Paris")
        .arg("--no-color")
        .assert()
        .success();

    let sql = fs::read_to_string(dir.path().join("partition_fix.sql")).unwrap();
    assert!(sql.contains("PARTITION p20251006 VALUES LESS THAN (1759701600) ENGINE = InnoDB,"));
    assert!(sql.contains("PARTITION p20251007 VALUES LESS THAN (1759788000) ENGINE = InnoDB,"));
    assert!(sql.contains("PARTITION p20251008 VALUES LESS THAN (1759881600) ENGINE = InnoDB\n);"));
}

#[test]
fn test_check_without_gaps() {
    let dir = workspace(
        "orders\n2025-10-08 00:00:00 1759881600 1 3\n2025-10-09 00:00:00 1759968000 2 4\n"
    );

    cmd(&dir)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("All tables are OK!"));

    let sql = fs::read_to_string(dir.path().join("partition_fix.sql")).unwrap();
    assert!(!sql.contains("ALTER TABLE"));
    assert!(!sql.contains("-- SUMMARY"));
}

#[test]
fn test_check_file_not_found() {
    let dir = tempfile::tempdir().unwrap();

    cmd(&dir)
        .arg("--no-color")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("PARTITION CHECKER - Reading from result.txt"))
        .stdout(predicate::str::contains("Reading partition data from 'result.txt'..."))
        .stderr(predicate::str::contains("Error"));
    assert!(!dir.path().join("partition_analysis.txt").exists());
}

#[test]
fn test_check_no_table_data() {
    let dir = workspace("\n\n");

    cmd(&dir)
        .arg("--no-color")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No table data found"))
        .stdout(predicate::str::contains("Expected format:"));
    assert!(!dir.path().join("partition_fix.sql").exists());
}

#[test]
fn test_check_custom_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("dump.txt"), SAMPLE).unwrap();

    cmd(&dir)
        .args([
            "-i",
            "dump.txt",
            "-a",
            "report.txt",
            "-o",
            "fix.sql",
            "--engine",
            "MyISAM",
            "--no-color"
        ])
        .assert()
        .success();

    let sql = fs::read_to_string(dir.path().join("fix.sql")).unwrap();
    assert!(sql.contains("ENGINE = MyISAM"));
    assert!(dir.path().join("report.txt").exists());
}

#[test]
fn test_check_json_format() {
    let dir = workspace(SAMPLE);

    let output = cmd(&dir)
        .args(["-f", "json", "--timezone", "utc"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["total_tables"], 2);
    assert_eq!(value["summary"]["tables_with_issues"], 1);
    assert_eq!(value["tables"][0]["commands"][0]["target"], "p20251008");
}

#[test]
fn test_check_yaml_format() {
    let dir = workspace(SAMPLE);

    cmd(&dir)
        .args(["-f", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tables_with_issues: 1"));
}

#[test]
fn test_config_file_sets_engine() {
    let dir = workspace(SAMPLE);
    fs::write(
        dir.path().join(".partition-checker.toml"),
        "[sql]\nengine = \"Aria\"\ntimezone = \"utc\"\n"
    )
    .unwrap();

    cmd(&dir).arg("--no-color").assert().success();

    let sql = fs::read_to_string(dir.path().join("partition_fix.sql")).unwrap();
    assert!(sql.contains("PARTITION p20251006 VALUES LESS THAN (1759708800) ENGINE = Aria,"));
}

#[test]
fn test_invalid_config_timezone() {
    let dir = workspace(SAMPLE);
    fs::write(
        dir.path().join(".partition-checker.toml"),
        "[sql]\ntimezone = \"mars\"\n"
    )
    .unwrap();

    cmd(&dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_invalid_rows_are_skipped() {
    let dir = workspace(
        "events\n2025-10-08 00:00:00 notanumber 1 0\n2025-10-09 00:00:00 1759968000 2 0\n"
    );

    cmd(&dir)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Partitions: 1"))
        .stderr(predicate::str::contains("Skipping invalid row"));
}

#[test]
fn test_help() {
    let dir = tempfile::tempdir().unwrap();
    cmd(&dir).arg("--help").assert().success();
}

#[test]
fn test_version() {
    let dir = tempfile::tempdir().unwrap();
    cmd(&dir).arg("--version").assert().success();
}
