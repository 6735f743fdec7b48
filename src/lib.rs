//! # Partition Gap Checker Library
//!
//! Gap detection and `REORGANIZE PARTITION` generation for daily partitioned
//! tables.

pub mod app;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
