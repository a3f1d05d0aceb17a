//! IAC Decoder Library
//!
//! A Rust library for decoding NOAA / UK Met Office surface-analysis bulletins
//! written in the IAC "fleet code" (WMO FM 46 family) into pressure centres,
//! fronts and isobars with geographic coordinates.
//!
//! This library provides tools for:
//! - Splitting bulletin lines into fixed-width code groups
//! - Validating bulletin headers and preambles
//! - Decoding `lalalolok` position groups
//! - Rebuilding multi-line fronts and isobars from continuation lines
//! - Emitting the decoded bulletin as JSON for chart renderers
//!
//! ```rust
//! use iac_decoder::BulletinDecoder;
//!
//! let bulletin = "ASXX21 EGRR 151200\n10001 33300 15120\n99900\n81978 55200\n";
//! let result = BulletinDecoder::default().decode_str(bulletin);
//! assert!(result.bulletin.metadata.is_valid_noaa_file);
//! assert_eq!(result.bulletin.pressure_centers[0].pressure_hpa, 978);
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod fleet_code;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    BulletinMetadata, DecodedBulletin, FileType, Front, FrontType, GeoBounds, GeoPoint,
    IssueTime, Isobar, PositionMode, PressureCenter, PressureKind,
};
pub use app::services::fleet_code::{BulletinDecoder, BulletinSession, DecodeResult, DecodeStats};
pub use config::Config;

/// Result type alias for the IAC decoder
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for operations around the decoder core
///
/// Per-line decoding problems never surface here; they degrade the decoded
/// bulletin instead and are counted in [`DecodeStats`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// A bulletin decoded but failed header or preamble validation
    #[error("Bulletin validation failed for '{path}': {reason}")]
    BulletinValidation { path: String, reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a bulletin validation error
    pub fn bulletin_validation(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BulletinValidation {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
