//! Tests for position group decoding

use super::super::position::{PositionError, decode_position};
use super::NORTH;
use crate::app::models::{GeoPoint, PositionMode};

const DECODABLE_MODES: [PositionMode; 3] = [
    PositionMode::NorthernHemisphere,
    PositionMode::SouthernHemisphere,
    PositionMode::Equatorial,
];

fn decode(group: &str) -> GeoPoint {
    decode_position(group, NORTH).unwrap()
}

#[test]
fn test_plain_position() {
    assert_eq!(decode("55200"), GeoPoint::new(55.0, 20.0));
    assert_eq!(decode("00000"), GeoPoint::new(0.0, 0.0));
}

#[test]
fn test_half_degree_corrections() {
    assert_eq!(decode("45151"), GeoPoint::new(45.5, 15.0));
    assert_eq!(decode("45152"), GeoPoint::new(45.0, 15.5));
    assert_eq!(decode("45153"), GeoPoint::new(45.5, 15.5));
    assert_eq!(decode("45154"), GeoPoint::new(45.0, 15.0));
}

#[test]
fn test_upper_indicators_negate_longitude() {
    assert_eq!(decode("45155"), GeoPoint::new(45.0, -15.0));
    assert_eq!(decode("45156"), GeoPoint::new(45.5, -15.0));
    assert_eq!(decode("45157"), GeoPoint::new(45.0, -15.5));
    assert_eq!(decode("45158"), GeoPoint::new(45.5, -15.5));
    assert_eq!(decode("45159"), GeoPoint::new(45.0, -15.0));
}

#[test]
fn test_half_degree_law_holds_in_every_mode() {
    for mode in DECODABLE_MODES {
        let plain = decode_position("45120", Some(mode)).unwrap();
        assert_eq!(plain, GeoPoint::new(45.0, 12.0), "mode {:?}", mode);

        let shifted = decode_position("45121", Some(mode)).unwrap();
        assert_eq!(shifted, GeoPoint::new(45.5, 12.0), "mode {:?}", mode);
    }
}

#[test]
fn test_latitude_is_never_negated() {
    let south = decode_position("30105", Some(PositionMode::SouthernHemisphere)).unwrap();
    assert_eq!(south.latitude, 30.0);
}

#[test]
fn test_decimal_point_in_degree_fields() {
    assert_eq!(decode("4.120"), GeoPoint::new(4.0, 12.0));
    assert_eq!(decode(".5120"), GeoPoint::new(0.5, 12.0));
}

#[test]
fn test_malformed_groups() {
    for group in ["4512/", "A5120", "45B20", "..120", "451", "empty", "/////"] {
        assert_eq!(
            decode_position(group, NORTH),
            Err(PositionError::MalformedGroup(group.to_string())),
            "group '{}'",
            group
        );
    }
}

#[test]
fn test_unsupported_modes_always_fail() {
    for mode in [PositionMode::CompassBearing, PositionMode::QuadrantLatLon] {
        assert_eq!(
            decode_position("55200", Some(mode)),
            Err(PositionError::UnsupportedMode(mode))
        );
    }
}

#[test]
fn test_unset_mode_fails() {
    assert_eq!(
        decode_position("55200", None),
        Err(PositionError::ModeUnset)
    );
}
