//! Application constants for the IAC fleet-code decoder
//!
//! This module contains the fixed group codes, header markers, and default
//! values used throughout the decoder and the command-line front end.

// =============================================================================
// Bulletin Header Markers
// =============================================================================

/// Bulletin type codes whose header line is tokenized without the 5-character rule
pub const BULLETIN_TYPES: &[&str] = &["ASXX21", "FSXX21"];

/// Originating centre expected in the second header token (UK Met Office, Exeter)
pub const ORIGINATING_CENTER: &str = "EGRR";

/// Fiji fleet-code bulletin type, routed to the header validator as a 3-token line
pub const FIJI_BULLETIN_TYPE: &str = "ASPS20";

// =============================================================================
// Tokenizer
// =============================================================================

/// Width of a fleet-code group
pub const GROUP_WIDTH: usize = 5;

/// Width of the bulletin type prefix checked for the accept-all-characters mode
pub const HEADER_PREFIX_WIDTH: usize = 6;

/// Sentinel token prepended to lines whose first group is blank
pub const CONTINUATION_TOKEN: &str = "empty";

// =============================================================================
// Group Codes
// =============================================================================

/// Section marker codes introducing each data section
pub mod sections {
    /// High/low pressure centres
    pub const PRESSURE_CENTERS: u32 = 99900;

    /// Frontal boundaries
    pub const FRONTS: u32 = 99911;

    /// Isobar contours
    pub const ISOBARS: u32 = 99922;
}

/// Preamble group codes and the sub-code carried by the second preamble group
pub mod preamble {
    /// Analysis bulletin preamble
    pub const ANALYSIS: u32 = 10001;

    /// Forecast (prognosis) bulletin preamble
    pub const FORECAST: u32 = 65556;

    /// Prefix of the second preamble group
    pub const SUB_CODE: &str = "333";
}

/// Group prefixes recognised inside the data sections
pub mod groups {
    /// Ship/buoy count marker (`9NNSS`), dropped before section decoding
    pub const COUNT_MARKER: char = '9';

    /// Low pressure centre
    pub const LOW_CENTER: &str = "81";

    /// High pressure centre
    pub const HIGH_CENTER: &str = "85";

    /// Pressure trough line, recognised but not decoded
    pub const TROUGH: &str = "83";

    /// Front start group (`66Ftt`)
    pub const FRONT: &str = "66";

    /// Isobar start group (`44PPP`)
    pub const ISOBAR: &str = "44";
}

// =============================================================================
// Value Expansion
// =============================================================================

/// Two-digit pressure codes at or above this value lost a leading "9"
pub const PRESSURE_HIGH_DIGIT_THRESHOLD: i32 = 50;

/// Isobar values below this lost a leading "1"
pub const ISOBAR_THOUSANDS_THRESHOLD: i32 = 500;

// =============================================================================
// Header Field Bounds
// =============================================================================

/// Largest day-of-month accepted in the header timestamp
pub const MAX_DAY: u32 = 31;

/// Hours are accepted below this bound
pub const HOURS_PER_DAY: u32 = 24;

/// Minutes are accepted below this bound
pub const MINUTES_PER_HOUR: u32 = 60;

// =============================================================================
// Command-line Defaults
// =============================================================================

/// File extension of bulletins picked up when a directory is given as input
pub const BULLETIN_FILE_EXTENSION: &str = "txt";

/// Configuration file name looked up in the user configuration directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Application directory name used for configuration lookup
pub const APP_DIR_NAME: &str = "iac-decoder";

/// Default log level when no verbosity flag is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";
