//! # Partition Gap Checker
//!
//! Finds missing daily partitions in MySQL range-partitioned tables and
//! generates the `ALTER TABLE ... REORGANIZE PARTITION` statements that
//! restore them.
//!
//! The checker never connects to a database. It reads a text export of
//! `information_schema.PARTITIONS`, reports every calendar day that has no
//! partition, and writes the fixes to a SQL script for review.
//!
//! # Quick Start
//!
//! ```bash
//! # Analyze result.txt in the current directory
//! partition-gap-checker
//!
//! # Different input, UTC partition bounds
//! partition-gap-checker -i dump.txt --timezone utc
//!
//! # Machine-readable findings
//! partition-gap-checker -f json > findings.json
//! ```
//!
//! # Input Format
//!
//! ```text
//! events
//! from_unixtime(PARTITION_DESCRIPTION) PARTITION_DESCRIPTION PARTITION_ORDINAL_POSITION TABLE_ROWS
//! 2025-10-09 00:00:00 1759964400 90 0
//! 2025-10-08 00:00:00 1759878000 89 0
//! ```
//!
//! # Outputs
//!
//! - `partition_analysis.txt` - Partition listing, missing days and proposed
//!   SQL per table, plus a summary
//! - `partition_fix.sql` - Only the `ALTER TABLE` statements, behind a
//!   warning header
//!
//! # Exit Codes
//!
//! - `0` - Run completed, whether or not gaps were found
//! - `1` - Input missing or unreadable, output not writable, or no table data
//!
//! # Modules
//!
//! - [`parser`](partition_gap_checker::parser) - Partition listing parsing
//! - [`checker`](partition_gap_checker::checker) - Gap detection and SQL generation
//! - [`output`](partition_gap_checker::output) - Report and script formatting
//! - [`config`](partition_gap_checker::config) - Configuration loading
//! - [`error`](partition_gap_checker::error) - Error types and constructors

use std::{io, process};

use clap::Parser;
use partition_gap_checker::{
    app::{CheckParams, run_check},
    cli::Cli,
    config::Config,
    error::AppResult,
    logging::setup_logging
};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> AppResult<i32> {
    let config = Config::load()?;
    let params = CheckParams {
        input_path:    cli.input,
        analysis_path: cli.analysis_output,
        sql_path:      cli.sql_output,
        timezone:      cli.timezone,
        engine:        cli.engine,
        output_format: cli.format,
        no_color:      cli.no_color
    };

    let result = run_check(params, config, &mut io::stdout().lock())?;
    Ok(result.exit_code)
}
