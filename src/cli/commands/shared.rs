//! Shared components for CLI commands
//!
//! Logging setup and bulletin input discovery used by both the decode and
//! validate commands.

use crate::app::services::fleet_code::{BulletinDecoder, DecodeResult};
use crate::constants::BULLETIN_FILE_EXTENSION;
use crate::{Error, Result};
use anyhow::Context;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Path argument meaning "read standard input"
pub const STDIN_ARG: &str = "-";

/// Totals reported back to `main` once a command finishes
#[derive(Debug, Clone, Default)]
pub struct CommandSummary {
    /// Bulletins decoded
    pub bulletins: usize,
    /// Bulletins whose header or preamble did not validate
    pub invalid_bulletins: usize,
    /// Inputs that could not be read at all
    pub unreadable: usize,
}

impl CommandSummary {
    /// Whether every bulletin was read and validated
    pub fn all_valid(&self) -> bool {
        self.invalid_bulletins == 0 && self.unreadable == 0
    }
}

/// A single bulletin source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulletinInput {
    File(PathBuf),
    Stdin,
}

impl fmt::Display for BulletinInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BulletinInput::File(path) => write!(f, "{}", path.display()),
            BulletinInput::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("iac_decoder={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Expand path arguments into bulletin inputs
///
/// Files are taken as given. Directories are walked recursively for bulletin
/// files, sorted for a stable order. `-` reads standard input and may only
/// appear once.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<BulletinInput>> {
    expand_paths(paths).map_err(|e| Error::configuration(format!("{:#}", e)))
}

fn expand_paths(paths: &[PathBuf]) -> anyhow::Result<Vec<BulletinInput>> {
    let mut inputs = Vec::new();

    for path in paths {
        if path.as_os_str() == STDIN_ARG {
            if inputs.contains(&BulletinInput::Stdin) {
                anyhow::bail!("Standard input can only be read once");
            }
            inputs.push(BulletinInput::Stdin);
        } else if path.is_dir() {
            let found = discover_bulletin_files(path)
                .with_context(|| format!("Failed to search {}", path.display()))?;
            if found.is_empty() {
                warn!("No bulletin files found in {}", path.display());
            }
            inputs.extend(found.into_iter().map(BulletinInput::File));
        } else if path.is_file() {
            inputs.push(BulletinInput::File(path.clone()));
        } else {
            anyhow::bail!("Input path does not exist: {}", path.display());
        }
    }

    if inputs.is_empty() {
        anyhow::bail!("No bulletins to decode");
    }

    debug!("Collected {} bulletin inputs", inputs.len());
    Ok(inputs)
}

/// Find bulletin files below a directory
pub fn discover_bulletin_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if path.is_file()
            && path.extension().and_then(|s| s.to_str()) == Some(BULLETIN_FILE_EXTENSION)
        {
            files.push(path.to_path_buf());
        }
    }

    // Sort files for consistent processing order
    files.sort();

    debug!("Discovered {} bulletin files in {}", files.len(), dir.display());
    Ok(files)
}

/// Decode one bulletin input
pub fn decode_input(decoder: &BulletinDecoder, input: &BulletinInput) -> Result<DecodeResult> {
    match input {
        BulletinInput::File(path) => decoder.decode_file(path),
        BulletinInput::Stdin => decoder.decode_reader(std::io::stdin().lock()),
    }
}
