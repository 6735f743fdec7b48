// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use chrono::{NaiveDate, NaiveDateTime};
use partition_gap_checker::{
    checker::{CheckOptions, PartitionChecker, TableReport, TimestampZone},
    output::{
        CheckReport, OutputFormat, OutputOptions, format_analysis_file, format_check_report,
        format_console_report, format_expected_format, format_preamble, format_sql_file,
        format_table_report
    },
    parser::parse_partition_listing
};

const SAMPLE: &str = "\
events
from_unixtime(PARTITION_DESCRIPTION) PARTITION_DESCRIPTION PARTITION_ORDINAL_POSITION TABLE_ROWS
2025-10-09 00:00:00 1759968000 5 0
2025-10-08 00:00:00 1759881600 4 12
2025-10-05 00:00:00 1759622400 3 40

sessions
from_unixtime(PARTITION_DESCRIPTION) PARTITION_DESCRIPTION PARTITION_ORDINAL_POSITION TABLE_ROWS
2025-10-08 00:00:00 1759881600 2 980
2025-10-07 00:00:00 1759795200 1 870
";

fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, 10)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap()
}

fn reports(text: &str) -> Vec<TableReport> {
    let options = CheckOptions {
        zone: TimestampZone::Utc,
        ..Default::default()
    };
    parse_partition_listing(text)
        .iter()
        .map(|(name, rows)| PartitionChecker::with_options(name, rows, options.clone()).analyze())
        .collect()
}

fn sample_check() -> CheckReport {
    CheckReport::new("result.txt", generated_at(), reports(SAMPLE))
}

#[test]
fn test_summary_counts() {
    let check = sample_check();
    assert_eq!(check.summary.total_tables, 2);
    assert_eq!(check.summary.tables_with_issues, 1);
    assert_eq!(check.summary.tables_ok, 1);
    assert_eq!(check.summary.total_commands, 1);
}

#[test]
fn test_table_report_lists_newest_first() {
    let check = sample_check();
    let text = format_table_report(&check.tables[0], false);
    let newest = text.find("2025-10-09 00:00:00").unwrap();
    let oldest = text.find("2025-10-05 00:00:00").unwrap();
    assert!(newest < oldest);
    assert!(text.contains("Total Partitions: 3"));
    assert!(text.contains("Date Range: 2025-10-05 to 2025-10-09"));
}

#[test]
fn test_table_report_with_gap() {
    let check = sample_check();
    let text = format_table_report(&check.tables[0], false);
    assert!(text.contains("WARNING: Found 2 missing date(s):"));
    assert!(text.contains("   - 2025-10-06"));
    assert!(text.contains("   - 2025-10-07"));
}

#[test]
fn test_table_report_without_gap() {
    let check = sample_check();
    let text = format_table_report(&check.tables[1], false);
    assert!(text.contains("OK: No missing dates found. Partitions are continuous."));
    assert!(!text.contains("WARNING"));
}

#[test]
fn test_analysis_file() {
    let text = format_analysis_file(&sample_check());
    assert!(text.starts_with(&"=".repeat(70)));
    assert!(text.contains("Generated: 2025-10-10 08:30:00"));
    assert!(text.contains("Source: result.txt"));
    assert!(text.contains("PROPOSED SQL COMMANDS FOR: events"));
    assert!(!text.contains("PROPOSED SQL COMMANDS FOR: sessions"));
    assert!(text.contains("Total SQL commands generated: 1"));
}

#[test]
fn test_sql_file() {
    let text = format_sql_file(&sample_check());
    assert!(text.starts_with("-- ====="));
    assert!(text.contains("-- WARNING: REVIEW CAREFULLY BEFORE EXECUTION!"));
    assert!(text.contains("-- Table: events"));
    assert!(text.contains("-- Missing 2 partition(s): 2025-10-06, 2025-10-07"));
    assert!(text.contains("REORGANIZE PARTITION p20251008 INTO ("));
    assert!(text.contains("-- Total SQL commands: 1"));
    assert!(!text.contains("-- Table: sessions"));
}

#[test]
fn test_sql_file_without_gaps_has_header_only() {
    let check = CheckReport::new(
        "result.txt",
        generated_at(),
        reports("t\n2025-10-08 00:00:00 1 1 0\n2025-10-09 00:00:00 2 2 0\n")
    );
    let text = format_sql_file(&check);
    assert!(text.contains("PARTITION FIX SQL COMMANDS"));
    assert!(!text.contains("ALTER TABLE"));
    assert!(!text.contains("-- SUMMARY"));
}

#[test]
fn test_console_report_with_issues() {
    let text = format_console_report(
        &sample_check(),
        "partition_analysis.txt",
        "partition_fix.sql",
        false
    );
    assert!(text.starts_with("Found 2 table(s): events, sessions"));
    assert!(text.contains("   - partition_analysis.txt - Detailed analysis report"));
    assert!(text.contains("WARNING: 1 table(s) require attention!"));
    assert!(text.contains("Review 'partition_fix.sql' before executing commands."));
    assert!(!text.contains("ALTER TABLE"));
}

#[test]
fn test_console_report_all_ok() {
    let check = CheckReport::new(
        "result.txt",
        generated_at(),
        reports("t\n2025-10-08 00:00:00 1 1 0\n")
    );
    let text = format_console_report(&check, "a.txt", "b.sql", false);
    assert!(text.contains("All tables are OK! No missing partitions detected."));
}

#[test]
fn test_check_report_json() {
    let opts = OutputOptions {
        format:  OutputFormat::Json,
        colored: false
    };
    let text = format_check_report(&sample_check(), "a.txt", "b.sql", &opts);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["source"], "result.txt");
    assert_eq!(value["tables"][0]["name"], "events");
    assert_eq!(value["tables"][0]["commands"][0]["engine"], "InnoDB");
    assert_eq!(value["summary"]["tables_ok"], 1);
}

#[test]
fn test_check_report_yaml() {
    let opts = OutputOptions {
        format:  OutputFormat::Yaml,
        colored: false
    };
    let text = format_check_report(&sample_check(), "a.txt", "b.sql", &opts);
    assert!(text.contains("source: result.txt"));
    assert!(text.contains("total_commands: 1"));
}

#[test]
fn test_preamble() {
    let text = format_preamble("dump.txt", false);
    assert!(text.contains("PARTITION CHECKER - Reading from dump.txt"));
    assert!(text.contains("Reading partition data from 'dump.txt'..."));
}

#[test]
fn test_expected_format() {
    let text = format_expected_format("result.txt", false);
    assert!(text.starts_with("Error: No table data found in 'result.txt'"));
    assert!(text.contains("Expected format:"));
    assert!(text.contains("2025-10-09 00:00:00 1759964400 90 0"));
}
