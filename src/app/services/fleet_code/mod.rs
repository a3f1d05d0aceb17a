//! IAC fleet-code bulletin decoder
//!
//! This module decodes surface-analysis bulletins written in the IAC fleet code
//! into pressure centres, fronts and isobars. The format has no delimiters
//! beyond fixed 5-character groups, and the meaning of a group depends on the
//! section it appears in and on the position mode announced by the preamble.
//!
//! ## Architecture
//!
//! The decoder is organized into logical components:
//! - [`tokenizer`] - Splits raw lines into 5-character code groups
//! - [`position`] - Decodes `lalalolok` position groups
//! - [`header`] - Bulletin header and preamble validation
//! - [`pressure_centers`] - Section `99900`, high and low centres
//! - [`fronts`] - Section `99911`, fronts with continuation lines
//! - [`isobars`] - Section `99922`, isobars with continuation lines
//! - [`session`] - Per-bulletin state machine routing lines to the sections
//! - [`decoder`] - Entry points for strings, readers and files
//! - [`stats`] - Decode statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use iac_decoder::app::services::fleet_code::BulletinDecoder;
//!
//! let text = "\
//! ASXX21 EGRR 151200
//! 10001 33300 15120
//! 99911
//! 66420 50200 51150 52100
//!       53050 54000
//! ";
//!
//! let result = BulletinDecoder::default().decode_str(text);
//! assert_eq!(result.bulletin.fronts.len(), 1);
//! assert_eq!(result.bulletin.fronts[0].points.len(), 5);
//! ```

pub mod decoder;
pub mod fronts;
pub mod header;
pub mod isobars;
pub mod position;
pub mod pressure_centers;
pub mod session;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use decoder::BulletinDecoder;
pub use header::{HeaderError, Preamble, PreambleError, validate_header, validate_preamble};
pub use position::{PositionError, decode_position};
pub use session::{BulletinSession, Section};
pub use stats::{DecodeResult, DecodeStats};
pub use tokenizer::tokenize;
