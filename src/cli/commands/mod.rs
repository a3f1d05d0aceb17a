//! Command implementations for the IAC decoder CLI
//!
//! Each subcommand lives in its own module:
//! - `decode`: decode bulletins and print JSON or a summary
//! - `validate`: report header and preamble validity

pub mod decode;
pub mod shared;
pub mod validate;

pub use shared::CommandSummary;

use crate::Result;
use crate::cli::args::Commands;

/// Dispatch to the subcommand handler
pub fn run(command: Commands) -> Result<CommandSummary> {
    match command {
        Commands::Decode(decode_args) => decode::run_decode(decode_args),
        Commands::Validate(validate_args) => validate::run_validate(validate_args),
    }
}
