//! Conversions from CLI-facing types to internal types.

use crate::{
    checker::TimestampZone,
    cli::{Format, Timezone},
    output::OutputFormat
};

/// Converts a CLI time zone to the zone used for partition bounds.
///
/// # Example
///
/// ```
/// use partition_gap_checker::{app::convert_timezone, checker::TimestampZone, cli::Timezone};
///
/// assert_eq!(convert_timezone(Timezone::Utc), TimestampZone::Utc);
/// ```
pub fn convert_timezone(timezone: Timezone) -> TimestampZone {
    match timezone {
        Timezone::Local => TimestampZone::Local,
        Timezone::Utc => TimestampZone::Utc
    }
}

/// Converts a CLI format to the internal output format.
pub fn convert_format(format: Format) -> OutputFormat {
    match format {
        Format::Text => OutputFormat::Text,
        Format::Json => OutputFormat::Json,
        Format::Yaml => OutputFormat::Yaml
    }
}
