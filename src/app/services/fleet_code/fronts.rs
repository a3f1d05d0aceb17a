//! Section `99911`: fronts
//!
//! A front starts with a `66Ftt` group followed by positions. Lines whose
//! first group is blank continue the most recent front.

use super::position::append_positions;
use super::stats::DecodeStats;
use super::tokenizer::skip_count_marker;
use crate::app::models::{Front, FrontType, PositionMode};
use crate::constants::{CONTINUATION_TOKEN, groups};
use tracing::trace;

/// Accumulates the fronts of one bulletin
///
/// `current` indexes the front that continuation lines extend. It is only a
/// routing hint; `fronts` owns every front.
#[derive(Debug, Default)]
pub struct FrontBuilder {
    fronts: Vec<Front>,
    current: Option<usize>,
}

impl FrontBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one line of the front section
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

        if fields.len() >= 2 && lead.starts_with(groups::FRONT) {
            let front_type = lead
                .chars()
                .nth(2)
                .map(FrontType::from_code)
                .unwrap_or(FrontType::Unknown);
            trace!("Starting {} front from {}", front_type, lead);

            let mut front = Front::new(front_type);
            append_positions(&mut front.points, &fields[1..], mode, stats);
            self.current = Some(self.fronts.len());
            self.fronts.push(front);
        } else if lead == CONTINUATION_TOKEN {
            if let Some(front) = self.current.and_then(|i| self.fronts.get_mut(i)) {
                append_positions(&mut front.points, &fields[1..], mode, stats);
            }
        } else {
            self.end_continuation();
        }
    }

    /// Stop routing continuation lines to the current front
    pub fn end_continuation(&mut self) {
        self.current = None;
    }

    #[cfg(test)]
    pub(crate) fn current(&self) -> Option<&Front> {
        self.current.and_then(|i| self.fronts.get(i))
    }

    #[cfg(test)]
    pub(crate) fn fronts(&self) -> &[Front] {
        &self.fronts
    }

    pub fn finish(self) -> Vec<Front> {
        self.fronts
    }
}
