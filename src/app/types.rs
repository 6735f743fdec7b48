//! Application types for the check command.

use std::path::PathBuf;

use crate::{
    cli::{Format, Timezone},
    output::CheckReport
};

/// Parameters for a check run.
///
/// `None` fields fall back to the configuration file, then to defaults.
///
/// # Example
///
/// ```
/// use partition_gap_checker::{app::CheckParams, cli::Format};
///
/// let params = CheckParams {
///     input_path:    Some("result.txt".into()),
///     analysis_path: None,
///     sql_path:      None,
///     timezone:      None,
///     engine:        None,
///     output_format: Format::Text,
///     no_color:      true
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CheckParams {
    /// Partition listing to read.
    pub input_path:    Option<PathBuf>,
    /// Analysis report to write.
    pub analysis_path: Option<PathBuf>,
    /// SQL script to write.
    pub sql_path:      Option<PathBuf>,
    /// Zone for missing partition bounds.
    pub timezone:      Option<Timezone>,
    /// Storage engine of generated partitions.
    pub engine:        Option<String>,
    /// Console output format.
    pub output_format: Format,
    /// Disable colored terminal output.
    pub no_color:      bool
}

/// Outcome of a check run.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// 0 after a complete run (gaps included), 1 when no table data was
    /// found.
    pub exit_code: i32,
    /// Findings; absent when no table data was found.
    pub report:    Option<CheckReport>
}
