//! Command-line argument definitions for the IAC decoder
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::OutputFormat;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the IAC fleet-code decoder
///
/// Decodes NOAA / UK Met Office surface-analysis bulletins into pressure
/// centres, fronts and isobars.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "iac-decoder",
    version,
    about = "Decode IAC fleet-code surface-analysis bulletins",
    long_about = "Decodes ASXX21/FSXX21 EGRR surface-analysis bulletins written in the IAC \
                  fleet code into pressure centres, fronts and isobars with decimal-degree \
                  positions, and emits them as JSON or a human-readable summary."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Decode bulletins and print the decoded features
    Decode(DecodeArgs),
    /// Check bulletin headers and preambles without printing features
    Validate(ValidateArgs),
}

/// Arguments for the decode command
#[derive(Debug, Clone, Parser)]
pub struct DecodeArgs {
    /// Bulletin files or directories
    ///
    /// Directories are searched recursively for `.txt` files. Use `-` to read
    /// a single bulletin from standard input.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        help = "Output format (defaults to the configured format)"
    )]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long = "pretty", help = "Pretty-print JSON output")]
    pub pretty: bool,

    /// Date the bulletin was received
    ///
    /// Bulletins only carry day, hour and minute. With a reference date the
    /// issue and valid times are resolved to full UTC timestamps.
    #[arg(
        short = 'r',
        long = "reference-date",
        value_name = "YYYY-MM-DD",
        help = "Resolve issue and valid times against this date"
    )]
    pub reference_date: Option<NaiveDate>,

    /// Configuration file path
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Bulletin files or directories
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Configuration file path
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only print failing bulletins
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Only report bulletins that fail validation",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Map `-v` / `-q` flags to a tracing level name
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl DecodeArgs {
    /// Get the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl ValidateArgs {
    /// Get the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}
