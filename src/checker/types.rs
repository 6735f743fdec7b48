//! Type definitions for partition checking.
//!
//! - [`PartitionRecord`] - A parsed, existing partition
//! - [`TimestampZone`] - How missing dates are turned into unix timestamps
//! - [`MissingDateGroup`] - A run of consecutive missing days
//! - [`TableReport`] - Findings for one table

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use compact_str::CompactString;
use serde::Serialize;
use smallvec::SmallVec;

use super::command::ReorganizeCommand;
use crate::{
    error::{AppResult, row_parse_error},
    parser::RawPartitionRow
};

/// Date-time layout of the first two columns of a data row.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Existing partition taken from the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionRecord {
    /// Partition boundary as reported by `from_unixtime`
    pub date:           NaiveDateTime,
    /// Raw `PARTITION_DESCRIPTION` value
    pub unix_timestamp: i64,
    /// Position of the partition within the table
    pub ordinal:        i64,
    /// Approximate number of rows
    pub row_count:      i64
}

impl PartitionRecord {
    /// Convert a raw row, validating every column.
    ///
    /// # Errors
    ///
    /// Returns an error if the date-time does not match
    /// [`DATETIME_FORMAT`] or a numeric column is not an integer.
    pub fn from_raw(row: &RawPartitionRow) -> AppResult<Self> {
        let date = NaiveDateTime::parse_from_str(&row.datetime, DATETIME_FORMAT)
            .map_err(|e| row_parse_error("date", &row.datetime, e))?;
        Ok(Self {
            date,
            unix_timestamp: parse_integer("unix timestamp", &row.unix_timestamp)?,
            ordinal: parse_integer("ordinal", &row.ordinal)?,
            row_count: parse_integer("row count", &row.row_count)?
        })
    }

    /// Calendar day of this partition
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }
}

fn parse_integer(field: &str, value: &str) -> AppResult<i64> {
    value
        .parse::<i64>()
        .map_err(|e| row_parse_error(field, value, e))
}

/// Time zone used to compute the unix timestamp of a missing partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TimestampZone {
    /// Interpret dates in the machine's local time zone
    #[default]
    Local,
    /// Interpret dates as UTC
    Utc
}

impl TimestampZone {
    /// Parse a zone name (`local` or `utc`, case-insensitive)
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "local" => Some(Self::Local),
            "utc" => Some(Self::Utc),
            _ => None
        }
    }

    /// Seconds since the epoch for a naive date-time in this zone.
    ///
    /// # Notes
    ///
    /// - Ambiguous local times resolve to the earlier instant
    /// - Local times skipped by a DST transition fall back to UTC
    pub fn timestamp(self, date: NaiveDateTime) -> i64 {
        match self {
            Self::Utc => date.and_utc().timestamp(),
            Self::Local => earliest_or_utc(chrono::Local.from_local_datetime(&date), date)
        }
    }
}

/// Timestamp of the earliest mapping of `date`, or of `date` read as UTC when
/// the zone skips it.
fn earliest_or_utc<Tz: TimeZone>(mapped: LocalResult<DateTime<Tz>>, date: NaiveDateTime) -> i64 {
    match mapped.earliest() {
        Some(local) => local.timestamp(),
        None => {
            log::warn!("{} does not exist in local time, using UTC", date);
            date.and_utc().timestamp()
        }
    }
}

impl std::fmt::Display for TimestampZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Utc => write!(f, "utc")
        }
    }
}

/// Maximal run of consecutive missing days.
///
/// Never empty: construction requires the first date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingDateGroup {
    dates: SmallVec<[NaiveDateTime; 8]>
}

impl MissingDateGroup {
    pub fn new(first: NaiveDateTime) -> Self {
        let mut dates = SmallVec::new();
        dates.push(first);
        Self {
            dates
        }
    }

    pub fn push(&mut self, date: NaiveDateTime) {
        self.dates.push(date);
    }

    /// Days of the run, ascending
    pub fn dates(&self) -> &[NaiveDateTime] {
        &self.dates
    }

    pub fn first(&self) -> NaiveDateTime {
        self.dates[0]
    }

    pub fn last(&self) -> NaiveDateTime {
        self.dates[self.dates.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Findings for a single table.
#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    /// Table name
    pub name:          CompactString,
    /// Existing partitions, ascending by date
    pub partitions:    Vec<PartitionRecord>,
    /// Missing days, ascending
    pub missing_dates: Vec<NaiveDateTime>,
    /// Generated fixes; groups without bounding partitions have none
    pub commands:      Vec<ReorganizeCommand>
}

impl TableReport {
    /// Whether any day is missing
    pub fn has_issues(&self) -> bool {
        !self.missing_dates.is_empty()
    }

    /// First and last partition day
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.partitions.first()?;
        let last = self.partitions.last()?;
        Some((first.day(), last.day()))
    }
}
