//! Decode statistics and result structures
//!
//! Per-line failures never abort a decode. They are tallied here so callers
//! can judge how complete a decoded bulletin is.

use crate::app::models::DecodedBulletin;
use serde::{Deserialize, Serialize};

/// Decode result with the bulletin and basic statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeResult {
    /// The decoded bulletin
    pub bulletin: DecodedBulletin,

    /// Statistics gathered while decoding
    pub stats: DecodeStats,
}

/// Decode statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecodeStats {
    /// Total number of lines fed to the decoder
    pub lines_read: usize,

    /// Lines with no tokens, no 5-character lead group, or outside a section
    pub lines_ignored: usize,

    /// Header lines seen (valid or not)
    pub header_lines: usize,

    /// Preamble lines seen (valid or not)
    pub preamble_lines: usize,

    /// Single-group section marker lines
    pub section_markers: usize,

    /// Lines routed to a section handler
    pub data_lines: usize,

    /// Position groups decoded into points
    pub positions_decoded: usize,

    /// Position groups skipped (malformed or undecodable mode)
    pub positions_rejected: usize,

    /// Pressure or isobar value groups that were not numeric
    pub malformed_groups: usize,

    /// Pressure trough groups recognised and skipped
    pub troughs_skipped: usize,

    /// Header and preamble rejections for debugging
    pub errors: Vec<String>,
}

impl DecodeStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of position groups that decoded, as a percentage
    pub fn position_success_rate(&self) -> f64 {
        let total = self.positions_decoded + self.positions_rejected;
        if total == 0 {
            0.0
        } else {
            (self.positions_decoded as f64 / total as f64) * 100.0
        }
    }
}
