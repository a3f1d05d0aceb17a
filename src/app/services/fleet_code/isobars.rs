//! Section `99922`: isobars

use super::position::append_positions;
use super::stats::DecodeStats;
use super::tokenizer::skip_count_marker;
use crate::app::models::{Isobar, PositionMode};
use crate::constants::{CONTINUATION_TOKEN, ISOBAR_THOUSANDS_THRESHOLD, groups};
use tracing::trace;

/// Expand a three-digit isobar code to hectopascals (`020` -> 1020)
pub fn expand_isobar_value(code: i32) -> i32 {
    if code < ISOBAR_THOUSANDS_THRESHOLD {
        code + 1000
    } else {
        code
    }
}

/// Accumulates the isobars of one bulletin
#[derive(Debug, Default)]
pub struct IsobarBuilder {
    isobars: Vec<Isobar>,
    current: Option<usize>,
}

impl IsobarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one line of the isobar section
    ///
    /// An `44PPP` group starts a new isobar. A line starting with the
    /// continuation sentinel extends the current isobar, any other line ends
    /// the continuation run.
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

        if fields.len() >= 2 && lead.starts_with(groups::ISOBAR) {
            let Some(code) = lead
                .get(2..5)
                .filter(|s| s.chars().all(|c| c.is_ascii_digit()))
                .and_then(|s| s.parse::<i32>().ok())
            else {
                trace!("Non-numeric isobar value in group {}", lead);
                stats.malformed_groups += 1;
                self.end_continuation();
                return;
            };

            let mut isobar = Isobar::new(expand_isobar_value(code));
            append_positions(&mut isobar.points, &fields[1..], mode, stats);
            self.current = Some(self.isobars.len());
            self.isobars.push(isobar);
        } else if lead == CONTINUATION_TOKEN {
            if let Some(isobar) = self.current.and_then(|i| self.isobars.get_mut(i)) {
                append_positions(&mut isobar.points, &fields[1..], mode, stats);
            }
        } else {
            self.end_continuation();
        }
    }

    /// Stop routing continuation lines to the current isobar
    pub fn end_continuation(&mut self) {
        self.current = None;
    }

    #[cfg(test)]
    pub(crate) fn current(&self) -> Option<&Isobar> {
        self.current.and_then(|i| self.isobars.get(i))
    }

    #[cfg(test)]
    pub(crate) fn isobars(&self) -> &[Isobar] {
        &self.isobars
    }

    pub fn finish(self) -> Vec<Isobar> {
        self.isobars
    }
}
