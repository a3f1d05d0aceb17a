//! Bulletin header and preamble validation
//!
//! The header line (`ASXX21 EGRR 151200`) carries the issue time; the
//! preamble line (`10001 33300 ...` or `65556 33300 ...`) carries the bulletin
//! type, the forecast lead time and the position mode for the whole bulletin.

use crate::app::models::{FileType, IssueTime, PositionMode};
use crate::config::DecoderConfig;
use crate::constants::preamble;
use thiserror::Error;

/// Reasons a header line is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeaderError {
    #[error("header needs at least 3 groups, found {0}")]
    TooShort(usize),

    #[error("unrecognised bulletin type '{0}'")]
    UnknownBulletinType(String),

    #[error("unexpected originating centre '{0}'")]
    UnexpectedCenter(String),

    #[error("non-numeric {field} in issue time '{group}'")]
    NonNumericField { field: &'static str, group: String },

    #[error("issue time out of range: {0}")]
    OutOfRange(String),
}

/// Validate a header line and extract the issue time
pub fn validate_header(
    tokens: &[String],
    config: &DecoderConfig,
) -> Result<IssueTime, HeaderError> {
    let [bulletin_type, center, time_group, ..] = tokens else {
        return Err(HeaderError::TooShort(tokens.len()));
    };

    if !config.is_bulletin_type(bulletin_type) {
        return Err(HeaderError::UnknownBulletinType(bulletin_type.clone()));
    }
    if *center != config.originating_center {
        return Err(HeaderError::UnexpectedCenter(center.clone()));
    }

    let day = two_digit_field(time_group, 0, "day")?;
    let hour = two_digit_field(time_group, 2, "hour")?;
    let minute = two_digit_field(time_group, 4, "minute")?;

    IssueTime::new(day, hour, minute).map_err(|e| HeaderError::OutOfRange(e.to_string()))
}

fn two_digit_field(group: &str, offset: usize, field: &'static str) -> Result<u32, HeaderError> {
    group
        .get(offset..offset + 2)
        .filter(|s| s.chars().all(|c| c.is_ascii_digit()))
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| HeaderError::NonNumericField {
            field,
            group: group.to_string(),
        })
}

/// Information carried by a valid preamble
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preamble {
    pub file_type: FileType,

    /// Forecast lead time in hours, forecasts only
    pub valid_hour: Option<u32>,

    pub position_mode: PositionMode,
}

/// Reasons a preamble line is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreambleError {
    #[error("unrecognised preamble layout '{0}'")]
    UnrecognisedLayout(String),

    #[error("non-numeric forecast lead time in '{0}'")]
    InvalidLeadTime(String),

    #[error("unknown position mode in '{0}'")]
    UnknownPositionMode(String),
}

/// Validate a preamble line
///
/// Accepts `10001 333xx nnnnn` for analyses and `65556 333xx nnnnn nnnhh`
/// for forecasts, where `xx` selects the position mode and `hh` is the lead
/// time.
pub fn validate_preamble(tokens: &[String]) -> Result<Preamble, PreambleError> {
    let layout = || PreambleError::UnrecognisedLayout(tokens.join(" "));

    let (file_type, mode_group, valid_hour) = match tokens {
        [code, mode_group, _] if is_code(code, preamble::ANALYSIS) => {
            (FileType::Analysis, mode_group, None)
        }
        [code, mode_group, _, lead_group] if is_code(code, preamble::FORECAST) => {
            let hours = lead_group
                .get(3..5)
                .filter(|s| s.chars().all(|c| c.is_ascii_digit()))
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| PreambleError::InvalidLeadTime(lead_group.clone()))?;
            (FileType::Forecast, mode_group, Some(hours))
        }
        _ => return Err(layout()),
    };

    if !mode_group.starts_with(preamble::SUB_CODE) {
        return Err(layout());
    }

    let position_mode = mode_group
        .get(3..5)
        .and_then(PositionMode::from_code)
        .ok_or_else(|| PreambleError::UnknownPositionMode(mode_group.clone()))?;

    Ok(Preamble {
        file_type,
        valid_hour,
        position_mode,
    })
}

fn is_code(token: &str, code: u32) -> bool {
    super::tokenizer::group_code(token) == Some(code)
}
