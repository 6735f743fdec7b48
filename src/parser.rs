//! Partition listing parser.
//!
//! Reads the plain-text export of `information_schema.PARTITIONS` produced by
//! a query such as:
//!
//! ```sql
//! SELECT from_unixtime(PARTITION_DESCRIPTION), PARTITION_DESCRIPTION,
//!        PARTITION_ORDINAL_POSITION, TABLE_ROWS
//! FROM information_schema.PARTITIONS
//! WHERE TABLE_NAME = 'events';
//! ```
//!
//! with the table name written above each result set:
//!
//! ```text
//! events
//! from_unixtime(PARTITION_DESCRIPTION) PARTITION_DESCRIPTION PARTITION_ORDINAL_POSITION TABLE_ROWS
//! 2025-10-09 00:00:00 1759964400 90 0
//! 2025-10-08 00:00:00 1759878000 89 0
//!
//! sessions
//! from_unixtime(PARTITION_DESCRIPTION) PARTITION_DESCRIPTION PARTITION_ORDINAL_POSITION TABLE_ROWS
//! 2025-10-09 00:00:00 1759964400 90 1250
//! ```
//!
//! # Line Classification
//!
//! Every line is trimmed and then classified:
//!
//! | Kind | Rule |
//! |------|------|
//! | Empty | nothing left after trimming |
//! | Data | starts with `YYYY-MM-DD` |
//! | Header | contains `from_unixtime` or `partition_description` |
//! | Table name | anything else |
//!
//! Data lines need at least four whitespace-separated tokens; the row count
//! column is optional and defaults to `"0"`.
//!
//! # Example
//!
//! ```
//! use partition_gap_checker::parser::parse_partition_listing;
//!
//! let text = "events\n2025-10-09 00:00:00 1759964400 90\n";
//! let tables = parse_partition_listing(text);
//!
//! let rows = tables.get("events").unwrap();
//! assert_eq!(rows[0].datetime, "2025-10-09 00:00:00");
//! assert_eq!(rows[0].row_count, "0");
//! ```

use std::{fs::read_to_string, path::Path, sync::LazyLock};

use compact_str::CompactString;
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

use crate::error::{AppResult, file_read_error};

/// Regex for data lines: a `YYYY-MM-DD` date at the start of the line.
static DATA_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("valid regex"));

/// Markers identifying a column header line (compared lowercase).
const HEADER_MARKERS: [&str; 2] = ["from_unixtime", "partition_description"];

/// Raw partition rows keyed by table name, in order of first appearance.
pub type TableRows = IndexMap<CompactString, Vec<RawPartitionRow>>;

/// Unparsed partition row as it appears in the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawPartitionRow {
    /// `YYYY-MM-DD HH:MM:SS` built from the first two tokens
    pub datetime:       String,
    /// `PARTITION_DESCRIPTION` value
    pub unix_timestamp: String,
    /// `PARTITION_ORDINAL_POSITION` value
    pub ordinal:        String,
    /// `TABLE_ROWS` value, `"0"` when the column is absent
    pub row_count:      String
}

impl RawPartitionRow {
    /// Split a data line into its columns.
    ///
    /// Returns `None` for lines with fewer than four tokens.
    pub fn from_line(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 {
            return None;
        }
        Some(Self {
            datetime:       format!("{} {}", parts[0], parts[1]),
            unix_timestamp: parts[2].to_string(),
            ordinal:        parts[3].to_string(),
            row_count:      parts.get(4).copied().unwrap_or("0").to_string()
        })
    }
}

/// Classification of a single trimmed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Empty,
    Data,
    Header,
    TableName
}

/// Classify a trimmed line.
pub fn classify_line(line: &str) -> LineKind {
    if line.is_empty() {
        LineKind::Empty
    } else if DATA_LINE_REGEX.is_match(line) {
        LineKind::Data
    } else if is_header(line) {
        LineKind::Header
    } else {
        LineKind::TableName
    }
}

fn is_header(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    HEADER_MARKERS.iter().any(|marker| lower.contains(marker))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// No table name seen yet
    ExpectTableOrData,
    /// Line right after a table name; a column header here is skipped
    ExpectHeaderOrData,
    /// Collecting data rows for the current table
    AccumulatingData
}

#[derive(Debug, Default)]
struct Accumulator {
    tables:  TableRows,
    current: Option<CompactString>,
    rows:    Vec<RawPartitionRow>
}

impl Accumulator {
    /// Move buffered rows into the current table, replacing any rows it
    /// already holds.
    ///
    /// Rows stay buffered while no table is open, so rows listed before the
    /// first table name end up in that table.
    fn flush(&mut self) {
        if let Some(name) = &self.current
            && !self.rows.is_empty()
        {
            log::debug!("Flushing {} row(s) for table {}", self.rows.len(), name);
            let rows = std::mem::take(&mut self.rows);
            if let Some(previous) = self.tables.insert(name.clone(), rows) {
                log::warn!(
                    "Table {} listed again, dropping {} earlier row(s)",
                    name,
                    previous.len()
                );
            }
        }
    }

    fn open_table(&mut self, name: &str) {
        self.flush();
        self.current = Some(CompactString::from(name));
    }
}

/// Parse a partition listing into raw rows grouped by table.
///
/// # Notes
///
/// - A table name that appears twice keeps its first position but only the
///   rows of its last section
/// - A column header inside a table's rows closes that section, so the rows
///   after it replace the ones before
/// - Tables without any data line are omitted
pub fn parse_partition_listing(text: &str) -> TableRows {
    let mut acc = Accumulator::default();
    let mut state = ParseState::ExpectTableOrData;

    for raw in text.lines() {
        let line = raw.trim();
        if state == ParseState::ExpectHeaderOrData {
            state = ParseState::AccumulatingData;
            if line.to_ascii_lowercase().contains(HEADER_MARKERS[0]) {
                continue;
            }
        }
        match classify_line(line) {
            LineKind::Empty => {}
            LineKind::Header => acc.flush(),
            LineKind::TableName => {
                acc.open_table(line);
                state = ParseState::ExpectHeaderOrData;
            }
            LineKind::Data => {
                if let Some(row) = RawPartitionRow::from_line(line) {
                    acc.rows.push(row);
                }
            }
        }
    }

    acc.flush();
    acc.tables
}

/// Read and parse a partition listing file.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be read as UTF-8.
pub fn parse_result_file(path: &Path) -> AppResult<TableRows> {
    let display = path.display().to_string();
    let text = read_to_string(path).map_err(|e| file_read_error(&display, e))?;
    let tables = parse_partition_listing(&text);
    log::debug!("Parsed {} table(s) from {}", tables.len(), display);
    Ok(tables)
}
