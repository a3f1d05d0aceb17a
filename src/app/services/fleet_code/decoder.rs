//! Bulletin decoder entry points
//!
//! This module wraps [`BulletinSession`] for whole bulletins, handling file
//! reading and line splitting. Each call decodes one bulletin from scratch;
//! no state is shared between calls.

use std::io::{BufRead, ErrorKind};
use std::path::Path;
use tracing::{debug, info};

use super::session::BulletinSession;
use super::stats::DecodeResult;
use crate::config::DecoderConfig;
use crate::{Error, Result};

/// Fleet-code bulletin decoder
#[derive(Debug, Clone, Default)]
pub struct BulletinDecoder {
    config: DecoderConfig,
}

impl BulletinDecoder {
    /// Create a new decoder with the given header configuration
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Start a line-by-line session for one bulletin
    pub fn session(&self) -> BulletinSession<'_> {
        BulletinSession::new(&self.config)
    }

    /// Decode a bulletin given as a sequence of lines
    pub fn decode_lines<I, S>(&self, lines: I) -> DecodeResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut session = self.session();
        for line in lines {
            session.process_line(line.as_ref());
        }
        session.finish()
    }

    /// Decode a bulletin held in memory
    pub fn decode_str(&self, text: &str) -> DecodeResult {
        self.decode_lines(text.lines())
    }

    /// Decode a bulletin from a buffered reader
    ///
    /// Lines are decoded lossily like [`decode_file`](Self::decode_file); only
    /// a failing read is an error.
    pub fn decode_reader<R: BufRead>(&self, reader: R) -> Result<DecodeResult> {
        let mut session = self.session();
        for line in reader.split(b'\n') {
            let bytes = line.map_err(|e| Error::io("Failed to read bulletin line", e))?;
            session.process_line(&String::from_utf8_lossy(&bytes));
        }
        Ok(session.finish())
    }

    /// Decode a bulletin file
    ///
    /// The file is read as bytes and decoded lossily so stray non-UTF-8 bytes
    /// in free-text lines do not abort the decode.
    pub fn decode_file(&self, path: &Path) -> Result<DecodeResult> {
        info!("Decoding bulletin file: {}", path.display());

        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::file_not_found(path.display().to_string()),
            _ => Error::io(format!("Failed to read file {}", path.display()), e),
        })?;
        let text = String::from_utf8_lossy(&bytes);
        let result = self.decode_str(&text);

        let bulletin = &result.bulletin;
        info!(
            "Decoded {}: {} pressure centres, {} fronts, {} isobars",
            path.display(),
            bulletin.pressure_centers.len(),
            bulletin.fronts.len(),
            bulletin.isobars.len()
        );
        debug!("Decode statistics: {:?}", result.stats);

        Ok(result)
    }
}
