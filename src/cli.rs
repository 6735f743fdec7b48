use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Partition Gap Checker - Find missing daily partitions and generate
/// REORGANIZE PARTITION fixes
#[derive(Parser, Debug)]
#[command(name = "partition-gap-checker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Partition listing to analyze [default: result.txt]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Analysis report file [default: partition_analysis.txt]
    #[arg(short, long)]
    pub analysis_output: Option<PathBuf>,

    /// SQL script file [default: partition_fix.sql]
    #[arg(short = 'o', long)]
    pub sql_output: Option<PathBuf>,

    /// Time zone used for the bounds of missing partitions [default: local]
    #[arg(short, long, value_enum)]
    pub timezone: Option<Timezone>,

    /// Storage engine of generated partitions [default: InnoDB]
    #[arg(short, long)]
    pub engine: Option<String>,

    /// Console output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    pub format: Format,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Timezone {
    Local,
    Utc
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
