//! Core check execution logic.

use std::io::Write;

use chrono::Local;

use super::{
    helpers::{
        analyze_tables, create_output_options, resolve_engine, resolve_path, resolve_zone,
        write_output
    },
    types::{CheckParams, CheckResult}
};
use crate::{
    checker::CheckOptions,
    config::Config,
    error::{AppResult, console_error},
    output::{
        CheckReport, OutputFormat, format_analysis_file, format_check_report,
        format_expected_format, format_preamble, format_sql_file
    },
    parser::parse_result_file
};

/// Executes the complete partition check, writing console text to `out`.
///
/// 1. **Parsing**: Reads the partition listing
/// 2. **Analysis**: Finds missing days and builds fixes per table
/// 3. **Output**: Writes the analysis report and the SQL script, then the
///    console report
///
/// In text mode the banner is written and flushed before the input is read,
/// so it is visible even when reading fails.
///
/// Finding gaps is not a failure: the exit code stays 0. When the listing
/// holds no table data the result carries exit code 1, the expected format
/// guidance is written, and no file is created.
///
/// # Errors
///
/// Returns an error if:
/// - The input file is missing or unreadable
/// - An output file or `out` cannot be written
/// - The configured time zone is unknown
///
/// # Example
///
/// ```no_run
/// use std::io;
///
/// use partition_gap_checker::{
///     app::{CheckParams, run_check},
///     cli::Format,
///     config::Config
/// };
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let params = CheckParams {
///     input_path:    None,
///     analysis_path: None,
///     sql_path:      None,
///     timezone:      None,
///     engine:        None,
///     output_format: Format::Text,
///     no_color:      false
/// };
///
/// let result = run_check(params, Config::default(), &mut io::stdout())?;
/// println!("Exit code: {}", result.exit_code);
/// # Ok(())
/// # }
/// ```
pub fn run_check<W: Write>(
    params: CheckParams,
    config: Config,
    out: &mut W
) -> AppResult<CheckResult> {
    let input_path = resolve_path(params.input_path, &config.files.input);
    let analysis_path = resolve_path(params.analysis_path, &config.files.analysis);
    let sql_path = resolve_path(params.sql_path, &config.files.sql);
    let options = CheckOptions {
        zone:   resolve_zone(params.timezone, config.sql.timezone.as_deref())?,
        engine: resolve_engine(params.engine, config.sql.engine)
    };
    let output_opts = create_output_options(params.output_format, params.no_color);
    let source = input_path.display().to_string();

    if matches!(output_opts.format, OutputFormat::Text) {
        write!(out, "{}", format_preamble(&source, output_opts.colored)).map_err(console_error)?;
        out.flush().map_err(console_error)?;
    }

    let tables = parse_result_file(&input_path)?;
    if tables.is_empty() {
        write!(out, "{}", format_expected_format(&source, output_opts.colored))
            .map_err(console_error)?;
        return Ok(CheckResult {
            exit_code: 1,
            report:    None
        });
    }

    let reports = analyze_tables(&tables, &options);
    let check = CheckReport::new(source, Local::now().naive_local(), reports);

    write_output(&analysis_path, &format_analysis_file(&check))?;
    write_output(&sql_path, &format_sql_file(&check))?;

    let console = format_check_report(
        &check,
        &analysis_path.display().to_string(),
        &sql_path.display().to_string(),
        &output_opts
    );
    write!(out, "{}", console).map_err(console_error)?;
    out.flush().map_err(console_error)?;

    Ok(CheckResult {
        exit_code: 0,
        report:    Some(check)
    })
}
