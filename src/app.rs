//! Application logic for the Partition Gap Checker CLI.
//!
//! This module contains the check pipeline separated from the main entry
//! point to enable testing.

mod check;
mod convert;
mod helpers;
mod types;

pub use check::run_check;
pub use convert::{convert_format, convert_timezone};
pub use helpers::{
    analyze_tables, create_output_options, resolve_engine, resolve_path, resolve_zone,
    write_output
};
pub use types::{CheckParams, CheckResult};
