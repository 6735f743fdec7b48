//! Gap detection for daily partitioned tables.
//!
//! A table is expected to have one partition per calendar day. The checker
//! sorts the existing partitions, walks every adjacent pair one day at a time
//! and reports each day that has no partition. Consecutive missing days are
//! grouped so a single statement can restore the whole run.
//!
//! # Example
//!
//! ```
//! use partition_gap_checker::{
//!     checker::{CheckOptions, PartitionChecker, TimestampZone},
//!     parser::parse_partition_listing
//! };
//!
//! let text = "\
//! events
//! 2025-01-01 00:00:00 1735689600 1 10
//! 2025-01-04 00:00:00 1735948800 2 10
//! 2025-01-05 00:00:00 1736035200 3 10
//! ";
//! let tables = parse_partition_listing(text);
//! let options = CheckOptions {
//!     zone: TimestampZone::Utc,
//!     ..Default::default()
//! };
//! let checker = PartitionChecker::with_options("events", &tables["events"], options);
//!
//! let missing = checker.find_missing_dates();
//! assert_eq!(missing.len(), 2);
//!
//! let commands = checker.generate_reorganize_commands(&missing);
//! assert_eq!(commands.len(), 1);
//! assert!(commands[0].to_sql().starts_with("ALTER TABLE events"));
//! ```

mod command;
mod types;

use chrono::{NaiveDateTime, TimeDelta};
pub use command::{DEFAULT_ENGINE, PartitionBound, ReorganizeCommand, partition_name};
use compact_str::CompactString;
pub use types::{DATETIME_FORMAT, MissingDateGroup, PartitionRecord, TableReport, TimestampZone};

use crate::parser::RawPartitionRow;

/// Settings that shape generated SQL.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Zone used for the bounds of missing partitions
    pub zone:   TimestampZone,
    /// Storage engine of generated partitions
    pub engine: CompactString
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            zone:   TimestampZone::default(),
            engine: CompactString::from(DEFAULT_ENGINE)
        }
    }
}

/// Partition analysis for a single table.
#[derive(Debug, Clone)]
pub struct PartitionChecker {
    table:      CompactString,
    partitions: Vec<PartitionRecord>,
    options:    CheckOptions
}

impl PartitionChecker {
    /// Create a checker with default options
    pub fn new(table: &str, rows: &[RawPartitionRow]) -> Self {
        Self::with_options(table, rows, CheckOptions::default())
    }

    /// Create a checker, converting and sorting the raw rows.
    ///
    /// # Notes
    ///
    /// - Rows with a malformed date or non-integer column are skipped with a
    ///   warning
    pub fn with_options(table: &str, rows: &[RawPartitionRow], options: CheckOptions) -> Self {
        let mut partitions: Vec<PartitionRecord> = rows
            .iter()
            .filter_map(|row| match PartitionRecord::from_raw(row) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("Skipping invalid row in {}: {:?} - {}", table, row, e);
                    None
                }
            })
            .collect();
        partitions.sort_by_key(|p| p.date);
        log::debug!("{}: {} valid partition(s)", table, partitions.len());
        Self {
            table: CompactString::from(table),
            partitions,
            options
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Existing partitions, ascending by date
    pub fn partitions(&self) -> &[PartitionRecord] {
        &self.partitions
    }

    /// Days between existing partitions that have no partition.
    ///
    /// Returns an empty list when fewer than two partitions exist.
    pub fn find_missing_dates(&self) -> Vec<NaiveDateTime> {
        let day = TimeDelta::days(1);
        let mut missing = Vec::new();
        for pair in self.partitions.windows(2) {
            let mut expected = pair[0].date + day;
            while expected < pair[1].date {
                missing.push(expected);
                expected += day;
            }
        }
        missing
    }

    /// Build one statement per group of consecutive missing days.
    ///
    /// # Notes
    ///
    /// - Groups before the first or after the last partition produce nothing:
    ///   there is no partition to reorganize
    pub fn generate_reorganize_commands(&self, missing: &[NaiveDateTime]) -> Vec<ReorganizeCommand> {
        group_consecutive_dates(missing)
            .iter()
            .filter_map(|group| match self.bounding_partitions(group) {
                (Some(_), Some(after)) => Some(self.create_reorganize_command(after, group)),
                _ => {
                    log::debug!(
                        "{}: no bounding partitions for gap starting {}, skipped",
                        self.table,
                        group.first()
                    );
                    None
                }
            })
            .collect()
    }

    /// Nearest partition strictly before and strictly after the group
    fn bounding_partitions(
        &self,
        group: &MissingDateGroup
    ) -> (Option<&PartitionRecord>, Option<&PartitionRecord>) {
        let (start, end) = (group.first(), group.last());
        let mut before = None;
        for partition in &self.partitions {
            if partition.date < start {
                before = Some(partition);
            } else if partition.date > end {
                return (before, Some(partition));
            }
        }
        (before, None)
    }

    /// Statement splitting `after` into the group's days plus itself.
    ///
    /// Each missing day is bounded by its own timestamp; `after` keeps its
    /// existing bound.
    pub fn create_reorganize_command(
        &self,
        after: &PartitionRecord,
        group: &MissingDateGroup
    ) -> ReorganizeCommand {
        let target = partition_name(after.day());
        let mut partitions: Vec<PartitionBound> = group
            .dates()
            .iter()
            .map(|date| PartitionBound {
                name:      partition_name(date.date()),
                less_than: self.options.zone.timestamp(*date)
            })
            .collect();
        partitions.push(PartitionBound {
            name:      target.clone(),
            less_than: after.unix_timestamp
        });
        ReorganizeCommand {
            table: self.table.clone(),
            target,
            partitions,
            engine: self.options.engine.clone()
        }
    }

    /// Run the full analysis for this table
    pub fn analyze(&self) -> TableReport {
        let missing_dates = self.find_missing_dates();
        let commands = self.generate_reorganize_commands(&missing_dates);
        TableReport {
            name: self.table.clone(),
            partitions: self.partitions.clone(),
            missing_dates,
            commands
        }
    }
}

/// Split ascending dates into runs of consecutive days.
///
/// A new group starts whenever two neighbours are not exactly one day apart.
pub fn group_consecutive_dates(dates: &[NaiveDateTime]) -> Vec<MissingDateGroup> {
    let day = TimeDelta::days(1);
    let mut groups: Vec<MissingDateGroup> = Vec::new();
    for &date in dates {
        match groups.last_mut() {
            Some(group) if date - group.last() == day => group.push(date),
            _ => groups.push(MissingDateGroup::new(date))
        }
    }
    groups
}
