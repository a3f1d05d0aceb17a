//! Test utilities for fleet-code decoder testing
//!
//! This module provides the sample bulletins and helper functions used across
//! the decoder test modules.

use crate::app::models::PositionMode;

mod position_tests;
mod section_tests;
mod tokenizer_tests;

/// Position mode of most test bulletins
pub const NORTH: Option<PositionMode> = Some(PositionMode::NorthernHemisphere);

/// Helper to build a token sequence
pub fn tokens(groups: &[&str]) -> Vec<String> {
    groups.iter().map(|g| g.to_string()).collect()
}

/// Helper to create a complete analysis bulletin covering all three sections
pub fn sample_analysis_bulletin() -> String {
    [
        "ASXX21 EGRR 151200",
        "10001 33300 15120",
        "99900",
        "90203 81978 55200",
        "85032 45153",
        "83/// 50100 52120",
        "99911",
        "66420 50200 51150 52100",
        "      53050 54000",
        "66620 60105 61106",
        "99922",
        "44020 40200 41150 42100",
        "      43050 44000",
        "44996 58207 59208",
        "99999",
    ]
    .join("\n")
}

/// Helper to create a forecast bulletin header and preamble
pub fn sample_forecast_preamble() -> String {
    ["FSXX21 EGRR 151200", "65556 33300 15120 00024"].join("\n")
}
