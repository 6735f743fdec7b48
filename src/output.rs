//! Report formatting.
//!
//! Every run produces three renditions of the same [`CheckReport`]:
//!
//! - the analysis report written to `partition_analysis.txt`
//! - the SQL script written to `partition_fix.sql`
//! - console output, either the mirrored text report or JSON/YAML
//!
//! File renditions are always plain text; console text is colored unless
//! disabled.

use chrono::NaiveDateTime;
use colored::{Color, Colorize};
use serde::Serialize;

use crate::checker::TableReport;

/// Width of the `=` and `-` rules in text output.
pub const RULE_WIDTH: usize = 70;

/// Layout of the "Generated:" timestamp.
const GENERATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Output format for console results
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true
        }
    }
}

/// Totals over all analyzed tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total_tables:       usize,
    pub tables_with_issues: usize,
    pub tables_ok:          usize,
    pub total_commands:     usize
}

impl RunSummary {
    pub fn from_reports(reports: &[TableReport]) -> Self {
        let tables_with_issues = reports.iter().filter(|r| r.has_issues()).count();
        Self {
            total_tables: reports.len(),
            tables_with_issues,
            tables_ok: reports.len() - tables_with_issues,
            total_commands: reports.iter().map(|r| r.commands.len()).sum()
        }
    }
}

/// Complete result of one run
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Input file the partitions were read from
    pub source:       String,
    pub generated_at: NaiveDateTime,
    /// Per-table findings in input order
    pub tables:       Vec<TableReport>,
    pub summary:      RunSummary
}

impl CheckReport {
    pub fn new(source: impl Into<String>, generated_at: NaiveDateTime, tables: Vec<TableReport>) -> Self {
        let summary = RunSummary::from_reports(&tables);
        Self {
            source: source.into(),
            generated_at,
            tables,
            summary
        }
    }
}

fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

fn sql_rule() -> String {
    format!("-- {}", "=".repeat(RULE_WIDTH - 2))
}

fn paint(text: &str, color: Color, colored: bool) -> String {
    if colored {
        text.color(color).bold().to_string()
    } else {
        text.to_string()
    }
}

fn generated(at: &NaiveDateTime) -> String {
    at.format(GENERATED_FORMAT).to_string()
}

/// Header of the analysis report file
pub fn format_report_header(source: &str, generated_at: &NaiveDateTime) -> String {
    format!(
        "{eq}\nPARTITION ANALYSIS REPORT\nGenerated: {}\nSource: {}\n{eq}\n",
        generated(generated_at),
        source,
        eq = rule('=')
    )
}

/// Per-table section: partition listing and missing days.
///
/// Partitions are listed newest first.
pub fn format_table_report(report: &TableReport, colored: bool) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("\n{}", rule('=')));
    lines.push(paint(
        &format!("PARTITION ANALYSIS: {}", report.name),
        Color::Cyan,
        colored
    ));
    lines.push(rule('='));
    lines.push(format!("\nTotal Partitions: {}", report.partitions.len()));
    if let Some((first, last)) = report.date_range() {
        lines.push(format!("Date Range: {} to {}", first, last));
    }
    lines.push("\nExisting Partitions:".to_string());
    lines.push(format!(
        "{:<20} {:<15} {:<10} {:<10}",
        "Date", "Unix Timestamp", "Ordinal", "Rows"
    ));
    lines.push(rule('-'));
    for p in report.partitions.iter().rev() {
        lines.push(format!(
            "{:<20} {:<15} {:<10} {:<10}",
            p.date.to_string(),
            p.unix_timestamp,
            p.ordinal,
            p.row_count
        ));
    }

    if report.has_issues() {
        let warning = format!(
            "WARNING: Found {} missing date(s):",
            report.missing_dates.len()
        );
        lines.push(format!("\n{}", paint(&warning, Color::Yellow, colored)));
        for date in &report.missing_dates {
            lines.push(format!("   - {}", date.date()));
        }
    } else {
        lines.push(format!(
            "\n{}",
            paint(
                "OK: No missing dates found. Partitions are continuous.",
                Color::Green,
                colored
            )
        ));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Proposed statements for the analysis file; empty without commands
pub fn format_proposed_commands(report: &TableReport) -> String {
    if report.commands.is_empty() {
        return String::new();
    }
    let mut text = format!(
        "\n{eq}\nPROPOSED SQL COMMANDS FOR: {}\n{eq}\n\n",
        report.name,
        eq = rule('=')
    );
    for cmd in &report.commands {
        text.push_str(&format!("{}\n\n", cmd));
    }
    text
}

/// Summary block shared by the analysis file and the console
pub fn format_summary(summary: &RunSummary) -> String {
    format!(
        "\n{eq}\nSUMMARY\n{eq}\n\
         Total tables analyzed: {}\n\
         Tables with missing partitions: {}\n\
         Tables OK: {}\n\
         Total SQL commands generated: {}\n\
         {eq}\n",
        summary.total_tables,
        summary.tables_with_issues,
        summary.tables_ok,
        summary.total_commands,
        eq = rule('=')
    )
}

/// Full content of the analysis report file
pub fn format_analysis_file(check: &CheckReport) -> String {
    let mut text = format_report_header(&check.source, &check.generated_at);
    for table in &check.tables {
        text.push_str(&format_table_report(table, false));
        text.push_str(&format_proposed_commands(table));
        text.push_str("\n\n");
    }
    text.push_str(&format_summary(&check.summary));
    text
}

/// Cautionary comment block opening the SQL script
pub fn format_sql_header(source: &str, generated_at: &NaiveDateTime) -> String {
    let rule = sql_rule();
    [
        rule.clone(),
        "-- PARTITION FIX SQL COMMANDS".to_string(),
        format!("-- Generated: {}", generated(generated_at)),
        format!("-- Source: {}", source),
        rule.clone(),
        "-- ".to_string(),
        "-- WARNING: REVIEW CAREFULLY BEFORE EXECUTION!".to_string(),
        "-- ".to_string(),
        "-- Recommendations:".to_string(),
        "--   1. Backup your database before making changes".to_string(),
        "--   2. Verify partition names match your naming convention".to_string(),
        "--   3. Check Unix timestamps are correct for your timezone".to_string(),
        "--   4. Test on a non-production environment first".to_string(),
        "--   5. Execute commands one at a time and verify results".to_string(),
        rule,
        String::new(),
        String::new()
    ]
    .join("\n")
}

/// Statements for one table, preceded by a comment block; empty without
/// commands
pub fn format_sql_table_block(report: &TableReport) -> String {
    if report.commands.is_empty() {
        return String::new();
    }
    let dates: Vec<String> = report
        .missing_dates
        .iter()
        .map(|d| d.date().to_string())
        .collect();
    let mut text = format!(
        "\n{rule}\n-- Table: {}\n-- Missing {} partition(s): {}\n{rule}\n\n",
        report.name,
        report.missing_dates.len(),
        dates.join(", "),
        rule = sql_rule()
    );
    for cmd in &report.commands {
        text.push_str(&format!("{}\n\n", cmd));
    }
    text
}

/// Trailing summary comment; empty when no command was generated
pub fn format_sql_summary(summary: &RunSummary) -> String {
    if summary.total_commands == 0 {
        return String::new();
    }
    format!(
        "\n{rule}\n-- SUMMARY\n{rule}\n\
         -- Total tables with issues: {}\n\
         -- Total SQL commands: {}\n\
         {rule}\n",
        summary.tables_with_issues,
        summary.total_commands,
        rule = sql_rule()
    )
}

/// Full content of the SQL script
pub fn format_sql_file(check: &CheckReport) -> String {
    let mut text = format_sql_header(&check.source, &check.generated_at);
    for table in &check.tables {
        text.push_str(&format_sql_table_block(table));
    }
    text.push_str(&format_sql_summary(&check.summary));
    text
}

/// Banner printed before the input is read
pub fn format_preamble(source: &str, colored: bool) -> String {
    format!(
        "{eq}\n{}\n{eq}\n\nReading partition data from '{}'...\n",
        paint(
            &format!("PARTITION CHECKER - Reading from {}", source),
            Color::Cyan,
            colored
        ),
        source,
        eq = rule('=')
    )
}

/// Guidance printed when the input holds no table data
pub fn format_expected_format(source: &str, colored: bool) -> String {
    format!(
        "{}\n\nExpected format:\n\
         table_name\n\
         from_unixtime(PARTITION_DESCRIPTION) PARTITION_DESCRIPTION PARTITION_ORDINAL_POSITION TABLE_ROWS\n\
         2025-10-09 00:00:00 1759964400 90 0\n\
         2025-10-08 00:00:00 1759878000 89 0\n",
        paint(
            &format!("Error: No table data found in '{}'", source),
            Color::Red,
            colored
        )
    )
}

/// Console text mirroring the analysis report.
///
/// Generated SQL is not echoed; the closing lines point at the output files.
pub fn format_console_report(
    check: &CheckReport,
    analysis_path: &str,
    sql_path: &str,
    colored: bool
) -> String {
    let names: Vec<&str> = check.tables.iter().map(|t| t.name.as_str()).collect();
    let mut text = format!(
        "{}\n\n",
        paint(
            &format!("Found {} table(s): {}", names.len(), names.join(", ")),
            Color::Green,
            colored
        )
    );
    text.push_str(&format!(
        "{eq}\nPARTITION ANALYSIS REPORT\nGenerated: {}\n{eq}\n",
        generated(&check.generated_at),
        eq = rule('=')
    ));
    for table in &check.tables {
        text.push_str(&format_table_report(table, colored));
        text.push_str("\n\n");
    }
    text.push_str(&format_summary(&check.summary));
    text.push_str(&format!(
        "\nOutput files created:\n   - {} - Detailed analysis report\n   - {} - SQL commands ready for execution\n",
        analysis_path, sql_path
    ));

    let issues = check.summary.tables_with_issues;
    if issues > 0 {
        text.push_str(&format!(
            "\n{}\n   Review '{}' before executing commands.\n",
            paint(
                &format!("WARNING: {} table(s) require attention!", issues),
                Color::Yellow,
                colored
            ),
            sql_path
        ));
    } else {
        text.push_str(&format!(
            "\n{}\n",
            paint(
                "All tables are OK! No missing partitions detected.",
                Color::Green,
                colored
            )
        ));
    }
    text
}

/// Format the run for the console according to the chosen format
pub fn format_check_report(
    check: &CheckReport,
    analysis_path: &str,
    sql_path: &str,
    opts: &OutputOptions
) -> String {
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(check).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(check).unwrap_or_default(),
        OutputFormat::Text => format_console_report(check, analysis_path, sql_path, opts.colored)
    }
}
