//! Position group decoding
//!
//! Positions are encoded as `lalalolok`: two digits of latitude, two digits
//! of longitude and a quadrant/half-degree indicator `k`. Only the three
//! `lalalolok` position modes are decodable.

use super::stats::DecodeStats;
use crate::app::models::{GeoPoint, PositionMode};
use thiserror::Error;
use tracing::trace;

/// Reasons a position group could not be decoded
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionError {
    /// No preamble has selected a position mode yet
    #[error("no position mode selected by a preamble")]
    ModeUnset,

    /// The mode is defined by the format but not decoded
    #[error("position mode {0:?} is not supported")]
    UnsupportedMode(PositionMode),

    /// A field is missing or not numeric
    #[error("malformed position group '{0}'")]
    MalformedGroup(String),
}

/// Decode a position group under the given mode
///
/// `k` adds half a degree to latitude (1, 6), longitude (2, 7) or both (3, 8)
/// and negates the longitude when 5 or above. Latitude is returned unsigned
/// in every mode.
pub fn decode_position(group: &str, mode: Option<PositionMode>) -> Result<GeoPoint, PositionError> {
    let mode = mode.ok_or(PositionError::ModeUnset)?;
    if !mode.is_decodable() {
        return Err(PositionError::UnsupportedMode(mode));
    }

    let malformed = || PositionError::MalformedGroup(group.to_string());

    let k = group
        .get(4..5)
        .and_then(|s| s.chars().next())
        .and_then(|c| c.to_digit(10))
        .ok_or_else(malformed)?;
    let mut latitude = group.get(0..2).and_then(parse_degrees).ok_or_else(malformed)?;
    let mut longitude = group.get(2..4).and_then(parse_degrees).ok_or_else(malformed)?;

    match k {
        1 | 6 => latitude += 0.5,
        2 | 7 => longitude += 0.5,
        3 | 8 => {
            latitude += 0.5;
            longitude += 0.5;
        }
        _ => {}
    }

    // TODO: longitudes of 100 degrees and beyond need the hemisphere flags of
    // the full lalalolok table; they are currently folded into 0-99.
    if k >= 5 {
        longitude = -longitude;
    }

    Ok(GeoPoint::new(latitude, longitude))
}

/// Parse a two-character degree field; digits and a decimal point only
fn parse_degrees(field: &str) -> Option<f64> {
    if !field.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    field.parse().ok()
}

/// Decode `groups` and append the successful positions to `points`
///
/// Groups that fail to decode are skipped and counted.
pub(super) fn append_positions(
    points: &mut Vec<GeoPoint>,
    groups: &[String],
    mode: Option<PositionMode>,
    stats: &mut DecodeStats,
) {
    for group in groups {
        match decode_position(group, mode) {
            Ok(point) => {
                points.push(point);
                stats.positions_decoded += 1;
            }
            Err(e) => {
                trace!("Skipping position: {}", e);
                stats.positions_rejected += 1;
            }
        }
    }
}
