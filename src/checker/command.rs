//! `ALTER TABLE ... REORGANIZE PARTITION` statement rendering.
//!
//! MySQL range partitions can only be split, never inserted between existing
//! ones. A gap is therefore filled by reorganizing the partition that follows
//! it into one partition per missing day plus the split partition itself:
//!
//! ```sql
//! ALTER TABLE events
//! REORGANIZE PARTITION p20251008 INTO (
//!   PARTITION p20251006 VALUES LESS THAN (1759708800) ENGINE = InnoDB,
//!   PARTITION p20251007 VALUES LESS THAN (1759795200) ENGINE = InnoDB,
//!   PARTITION p20251008 VALUES LESS THAN (1759881600) ENGINE = InnoDB
//! );
//! ```

use std::fmt;

use chrono::NaiveDate;
use compact_str::CompactString;
use serde::Serialize;

/// Storage engine written when none is configured.
pub const DEFAULT_ENGINE: &str = "InnoDB";

/// Partition name for a day: `p` followed by `YYYYMMDD`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use partition_gap_checker::checker::partition_name;
///
/// let date = NaiveDate::from_ymd_opt(2025, 10, 9).unwrap();
/// assert_eq!(partition_name(date), "p20251009");
/// ```
pub fn partition_name(date: NaiveDate) -> String {
    format!("p{}", date.format("%Y%m%d"))
}

/// One `PARTITION ... VALUES LESS THAN (...)` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionBound {
    pub name:      String,
    pub less_than: i64
}

/// Statement replacing the partition after a gap with the missing ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReorganizeCommand {
    /// Table being altered
    pub table:      CompactString,
    /// Existing partition that is split
    pub target:     String,
    /// New partitions in ascending order, the target last
    pub partitions: Vec<PartitionBound>,
    /// Storage engine of every new partition
    pub engine:     CompactString
}

impl ReorganizeCommand {
    /// Render the statement as SQL
    pub fn to_sql(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ReorganizeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ALTER TABLE {}", self.table)?;
        writeln!(f, "REORGANIZE PARTITION {} INTO (", self.target)?;
        let lines: Vec<String> = self
            .partitions
            .iter()
            .map(|p| {
                format!(
                    "  PARTITION {} VALUES LESS THAN ({}) ENGINE = {}",
                    p.name, p.less_than, self.engine
                )
            })
            .collect();
        writeln!(f, "{}", lines.join(",\n"))?;
        write!(f, ");")
    }
}
