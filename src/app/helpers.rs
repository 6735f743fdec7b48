//! Helper functions for the check command.
//!
//! Setting resolution (CLI over configuration over defaults), per-table
//! analysis and output file writing.

use std::{
    fs,
    path::{Path, PathBuf}
};

use compact_str::CompactString;

use super::convert::{convert_format, convert_timezone};
use crate::{
    checker::{CheckOptions, DEFAULT_ENGINE, PartitionChecker, TableReport, TimestampZone},
    cli::{Format, Timezone},
    error::{AppResult, config_error, file_write_error},
    output::OutputOptions,
    parser::TableRows
};

/// Picks the CLI path when given, otherwise the configured one.
///
/// # Example
///
/// ```
/// use std::path::Path;
///
/// use partition_gap_checker::app::resolve_path;
///
/// let configured = Path::new("result.txt");
/// assert_eq!(resolve_path(None, configured), configured);
/// assert_eq!(resolve_path(Some("dump.txt".into()), configured), Path::new("dump.txt"));
/// ```
pub fn resolve_path(cli: Option<PathBuf>, configured: &Path) -> PathBuf {
    cli.unwrap_or_else(|| configured.to_path_buf())
}

/// Resolves the time zone for partition bounds.
///
/// # Errors
///
/// Returns a configuration error if the configured name is neither `local`
/// nor `utc`.
pub fn resolve_zone(cli: Option<Timezone>, configured: Option<&str>) -> AppResult<TimestampZone> {
    if let Some(timezone) = cli {
        return Ok(convert_timezone(timezone));
    }
    match configured {
        Some(name) => TimestampZone::parse(name).ok_or_else(|| {
            config_error(format!(
                "Unknown timezone '{}' (expected 'local' or 'utc')",
                name
            ))
        }),
        None => Ok(TimestampZone::default())
    }
}

/// Resolves the storage engine of generated partitions
pub fn resolve_engine(cli: Option<String>, configured: Option<String>) -> CompactString {
    cli.or(configured)
        .map(CompactString::from)
        .unwrap_or_else(|| CompactString::from(DEFAULT_ENGINE))
}

/// Creates output options from CLI parameters
pub fn create_output_options(format: Format, no_color: bool) -> OutputOptions {
    OutputOptions {
        format:  convert_format(format),
        colored: !no_color
    }
}

/// Analyzes every table in input order
pub fn analyze_tables(tables: &TableRows, options: &CheckOptions) -> Vec<TableReport> {
    tables
        .iter()
        .map(|(name, rows)| PartitionChecker::with_options(name, rows, options.clone()).analyze())
        .collect()
}

/// Writes an output file, replacing any previous content.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_output(path: &Path, content: &str) -> AppResult<()> {
    fs::write(path, content).map_err(|e| file_write_error(&path.display().to_string(), e))?;
    log::info!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}
