//! Section `99900`: high and low pressure centres
//!
//! Each centre is a single line: an `8PcPP` group followed by its position.
//! `P` (table 3152) selects high or low and `PP` is the central pressure
//! with the leading "9" or "10" dropped.

use super::position::decode_position;
use super::stats::DecodeStats;
use super::tokenizer::skip_count_marker;
use crate::app::models::{PositionMode, PressureCenter, PressureKind};
use crate::constants::{PRESSURE_HIGH_DIGIT_THRESHOLD, groups};
use tracing::trace;

/// Expand a two-digit pressure code to hectopascals
///
/// Codes of 50 and above are read as 9xx hPa, lower codes as 10xx hPa.
pub fn expand_pressure(code: i32) -> i32 {
    if code >= PRESSURE_HIGH_DIGIT_THRESHOLD {
        code + 900
    } else {
        code + 1000
    }
}

/// Accumulates the pressure centres of one bulletin
#[derive(Debug, Default)]
pub struct PressureCenterBuilder {
    centers: Vec<PressureCenter>,
}

impl PressureCenterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one line of the pressure-centre section
    pub fn process_line(
        &mut self,
        tokens: &[String],
        mode: Option<PositionMode>,
        stats: &mut DecodeStats,
    ) {
        let fields = skip_count_marker(tokens);
        let Some(lead) = fields.first() else {
            return;
        };

        if fields.len() >= 2
            && (lead.starts_with(groups::LOW_CENTER) || lead.starts_with(groups::HIGH_CENTER))
        {
            if let Some(center) = decode_center(lead, &fields[1], mode, stats) {
                self.centers.push(center);
            }
        } else if lead.starts_with(groups::TROUGH) {
            trace!("Skipping trough line group {}", lead);
            stats.troughs_skipped += 1;
        }
    }

    #[cfg(test)]
    pub(crate) fn centers(&self) -> &[PressureCenter] {
        &self.centers
    }

    pub fn finish(self) -> Vec<PressureCenter> {
        self.centers
    }
}

fn decode_center(
    lead: &str,
    position_group: &str,
    mode: Option<PositionMode>,
    stats: &mut DecodeStats,
) -> Option<PressureCenter> {
    let kind = lead.chars().nth(1).and_then(PressureKind::from_code)?;

    let Some(code) = lead
        .get(3..5)
        .filter(|s| s.chars().all(|c| c.is_ascii_digit()))
        .and_then(|s| s.parse::<i32>().ok())
    else {
        trace!("Non-numeric pressure in group {}", lead);
        stats.malformed_groups += 1;
        return None;
    };

    match decode_position(position_group, mode) {
        Ok(position) => {
            stats.positions_decoded += 1;
            Some(PressureCenter {
                kind,
                position,
                pressure_hpa: expand_pressure(code),
            })
        }
        Err(e) => {
            trace!("Dropping {} centre: {}", kind.symbol(), e);
            stats.positions_rejected += 1;
            None
        }
    }
}
