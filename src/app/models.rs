//! Data models for decoded fleet-code bulletins
//!
//! This module contains the structures handed to downstream consumers once a
//! bulletin has been decoded: the bulletin metadata and the three feature
//! collections (pressure centres, fronts and isobars) with their coordinates.

use crate::constants::{HOURS_PER_DAY, MAX_DAY, MINUTES_PER_HOUR};
use crate::{Error, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Bulletin Metadata
// =============================================================================

/// Issue time carried by the bulletin header (`DDHHMM`)
///
/// The header only encodes day-of-month, hour and minute. Month and year have
/// to be supplied by the caller through [`IssueTime::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTime {
    /// Day of month, 0-31 as accepted by the header validator
    pub day: u32,

    /// Hour, 0-23
    pub hour: u32,

    /// Minute, 0-59
    pub minute: u32,
}

impl IssueTime {
    /// Create a new issue time with bounds validation
    pub fn new(day: u32, hour: u32, minute: u32) -> Result<Self> {
        if day > MAX_DAY {
            return Err(Error::data_validation(format!(
                "Day of month {} out of range 0-{}",
                day, MAX_DAY
            )));
        }
        if hour >= HOURS_PER_DAY {
            return Err(Error::data_validation(format!(
                "Hour {} out of range 0-{}",
                hour,
                HOURS_PER_DAY - 1
            )));
        }
        if minute >= MINUTES_PER_HOUR {
            return Err(Error::data_validation(format!(
                "Minute {} out of range 0-{}",
                minute,
                MINUTES_PER_HOUR - 1
            )));
        }

        Ok(Self { day, hour, minute })
    }

    /// Resolve the issue time to a full UTC timestamp
    ///
    /// The issue is placed in the month of `reference`, or in the previous
    /// month when its day lies after the reference day (a bulletin is never
    /// issued in the future). Returns `None` for day 0 or a day that does not
    /// exist in the chosen month.
    pub fn resolve(&self, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
        if self.day == 0 {
            return None;
        }

        let (mut year, mut month) = (reference.year(), reference.month());
        if self.day > reference.day() {
            if month == 1 {
                year -= 1;
                month = 12;
            } else {
                month -= 1;
            }
        }

        let naive = NaiveDate::from_ymd_opt(year, month, self.day)?
            .and_hms_opt(self.hour, self.minute, 0)?;
        Some(Utc.from_utc_datetime(&naive))
    }
}

impl fmt::Display for IssueTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:02}", self.day, self.hour, self.minute)
    }
}

/// Kind of bulletin announced by the preamble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FileType {
    /// Surface analysis (`10001`)
    Analysis,
    /// Surface forecast (`65556`)
    Forecast,
    /// No valid preamble seen
    #[default]
    Unknown,
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileType::Analysis => "analysis",
            FileType::Forecast => "forecast",
            FileType::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Position encoding selected by the preamble for the whole bulletin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionMode {
    /// `lalalolok`, northern hemisphere (`00`)
    NorthernHemisphere,
    /// `lalalolok`, southern hemisphere (`11`)
    SouthernHemisphere,
    /// `lalalolok`, equatorial belt (`22`)
    Equatorial,
    /// `iiiD1s1`, bearing and distance from a station (`66`)
    CompassBearing,
    /// `Qlalalolo`, octant-qualified latitude/longitude (`88`)
    QuadrantLatLon,
}

impl PositionMode {
    /// Look up the mode from the two-character preamble code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "00" => Some(PositionMode::NorthernHemisphere),
            "11" => Some(PositionMode::SouthernHemisphere),
            "22" => Some(PositionMode::Equatorial),
            "66" => Some(PositionMode::CompassBearing),
            "88" => Some(PositionMode::QuadrantLatLon),
            _ => None,
        }
    }

    /// Whether positions in this mode can be decoded
    pub fn is_decodable(&self) -> bool {
        matches!(
            self,
            PositionMode::NorthernHemisphere
                | PositionMode::SouthernHemisphere
                | PositionMode::Equatorial
        )
    }
}

/// Metadata gathered from the header and preamble lines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulletinMetadata {
    /// Issue time from the last header line that validated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued: Option<IssueTime>,

    /// Whether the last header line seen was a valid NOAA/EGRR header
    pub is_valid_noaa_file: bool,

    /// Whether a preamble line decoded successfully
    pub has_valid_preamble: bool,

    /// Analysis or forecast
    pub file_type: FileType,

    /// Forecast lead time in hours (forecast bulletins only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_hour: Option<u32>,

    /// Position encoding mode; `None` until a preamble validates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_mode: Option<PositionMode>,
}

impl BulletinMetadata {
    /// Timestamp the decoded features are valid for
    ///
    /// For forecasts this is the issue time plus the lead time; for analyses
    /// it is the issue time itself.
    pub fn valid_time(&self, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let issued = self.issued?.resolve(reference)?;
        match (self.file_type, self.valid_hour) {
            (FileType::Forecast, Some(hours)) => Some(issued + Duration::hours(i64::from(hours))),
            _ => Some(issued),
        }
    }
}

// =============================================================================
// Geographic Types
// =============================================================================

/// A decoded position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude, degrees
    pub latitude: f64,

    /// Longitude, degrees (negative west)
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Geographic extent of a set of points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeoBounds {
    /// Degenerate bounds around a single point
    pub fn from_point(point: GeoPoint) -> Self {
        Self {
            min_lat: point.latitude,
            max_lat: point.latitude,
            min_lon: point.longitude,
            max_lon: point.longitude,
        }
    }

    /// Grow the bounds to contain `point`
    pub fn include(&mut self, point: GeoPoint) {
        self.min_lat = self.min_lat.min(point.latitude);
        self.max_lat = self.max_lat.max(point.latitude);
        self.min_lon = self.min_lon.min(point.longitude);
        self.max_lon = self.max_lon.max(point.longitude);
    }
}

// =============================================================================
// Weather Features
// =============================================================================

/// High or low pressure centre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureKind {
    High,
    Low,
}

impl PressureKind {
    /// Map the pressure-system character of an `8PPpp` group (table 3152)
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '1' => Some(PressureKind::Low),
            '5' => Some(PressureKind::High),
            _ => None,
        }
    }

    /// Chart symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureKind::High => "H",
            PressureKind::Low => "L",
        }
    }
}

/// A surface pressure centre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureCenter {
    pub kind: PressureKind,
    pub position: GeoPoint,

    /// Central pressure in hectopascals
    pub pressure_hpa: i32,
}

/// Front classification (WMO code table 1152, collapsed pairwise)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrontType {
    Stationary,
    Warm,
    Cold,
    Occlusion,
    InstabilityLine,
    Intertropical,
    ConvergenceLine,
    Unknown,
}

impl FrontType {
    /// Map the type character of a `66Ftt` group
    pub fn from_code(code: char) -> Self {
        match code.to_digit(10) {
            Some(0 | 1) => FrontType::Stationary,
            Some(2 | 3) => FrontType::Warm,
            Some(4 | 5) => FrontType::Cold,
            Some(6) => FrontType::Occlusion,
            Some(7) => FrontType::InstabilityLine,
            Some(8) => FrontType::Intertropical,
            Some(9) => FrontType::ConvergenceLine,
            _ => FrontType::Unknown,
        }
    }
}

impl fmt::Display for FrontType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FrontType::Stationary => "stationary",
            FrontType::Warm => "warm",
            FrontType::Cold => "cold",
            FrontType::Occlusion => "occlusion",
            FrontType::InstabilityLine => "instability line",
            FrontType::Intertropical => "intertropical",
            FrontType::ConvergenceLine => "convergence line",
            FrontType::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// A frontal boundary traced as an ordered path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Front {
    pub front_type: FrontType,
    pub points: Vec<GeoPoint>,
}

impl Front {
    pub fn new(front_type: FrontType) -> Self {
        Self {
            front_type,
            points: Vec::new(),
        }
    }
}

/// An isobar contour traced as an ordered path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Isobar {
    /// Contour value in hectopascals
    pub value_hpa: i32,
    pub points: Vec<GeoPoint>,
}

impl Isobar {
    pub fn new(value_hpa: i32) -> Self {
        Self {
            value_hpa,
            points: Vec::new(),
        }
    }
}

// =============================================================================
// Decoded Bulletin
// =============================================================================

/// Complete decode of one bulletin
///
/// Produced once the input is exhausted; nothing in the crate mutates it
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecodedBulletin {
    pub metadata: BulletinMetadata,
    pub pressure_centers: Vec<PressureCenter>,
    pub fronts: Vec<Front>,
    pub isobars: Vec<Isobar>,
}

impl DecodedBulletin {
    /// Number of decoded features across all three collections
    pub fn feature_count(&self) -> usize {
        self.pressure_centers.len() + self.fronts.len() + self.isobars.len()
    }

    /// Number of decoded points across all features
    pub fn point_count(&self) -> usize {
        self.pressure_centers.len()
            + self.fronts.iter().map(|f| f.points.len()).sum::<usize>()
            + self.isobars.iter().map(|i| i.points.len()).sum::<usize>()
    }

    /// Iterate over every decoded point
    pub fn points(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.pressure_centers
            .iter()
            .map(|c| c.position)
            .chain(self.fronts.iter().flat_map(|f| f.points.iter().copied()))
            .chain(self.isobars.iter().flat_map(|i| i.points.iter().copied()))
    }

    /// Geographic extent of every decoded point, `None` when there are none
    pub fn bounds(&self) -> Option<GeoBounds> {
        let mut points = self.points();
        let mut bounds = GeoBounds::from_point(points.next()?);
        for point in points {
            bounds.include(point);
        }
        Some(bounds)
    }
}
