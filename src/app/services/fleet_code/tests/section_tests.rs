//! Tests for the pressure centre, front and isobar section builders

use super::super::fronts::FrontBuilder;
use super::super::isobars::{IsobarBuilder, expand_isobar_value};
use super::super::pressure_centers::{PressureCenterBuilder, expand_pressure};
use super::super::stats::DecodeStats;
use super::{NORTH, tokens};
use crate::app::models::{FrontType, GeoPoint, PositionMode, PressureKind};

const COMPASS: Option<PositionMode> = Some(PositionMode::CompassBearing);

mod pressure_center_tests {
    use super::*;

    #[test]
    fn test_pressure_expansion_law() {
        for code in 0..100 {
            let expected = if code >= 50 { code + 900 } else { code + 1000 };
            assert_eq!(expand_pressure(code), expected, "code {:02}", code);
        }
        assert_eq!(expand_pressure(5), 1005);
        assert_eq!(expand_pressure(92), 992);
    }

    #[test]
    fn test_low_and_high_centers() {
        let mut builder = PressureCenterBuilder::new();
        let mut stats = DecodeStats::new();

        builder.process_line(&tokens(&["81978", "55200"]), NORTH, &mut stats);
        builder.process_line(&tokens(&["85032", "45153"]), NORTH, &mut stats);

        let centers = builder.finish();
        assert_eq!(centers.len(), 2);

        assert_eq!(centers[0].kind, PressureKind::Low);
        assert_eq!(centers[0].pressure_hpa, 978);
        assert_eq!(centers[0].position, GeoPoint::new(55.0, 20.0));

        assert_eq!(centers[1].kind, PressureKind::High);
        assert_eq!(centers[1].pressure_hpa, 1032);
        assert_eq!(centers[1].position, GeoPoint::new(45.5, 15.5));
        assert_eq!(stats.positions_decoded, 2);
    }

    #[test]
    fn test_count_marker_is_dropped() {
        let mut builder = PressureCenterBuilder::new();
        let mut stats = DecodeStats::new();

        builder.process_line(&tokens(&["90203", "81005", "60100"]), NORTH, &mut stats);

        assert_eq!(builder.centers().len(), 1);
        assert_eq!(builder.centers()[0].pressure_hpa, 1005);
    }

    #[test]
    fn test_trough_is_recognised_not_decoded() {
        let mut builder = PressureCenterBuilder::new();
        let mut stats = DecodeStats::new();

        builder.process_line(&tokens(&["83///", "50100", "52120"]), NORTH, &mut stats);

        assert!(builder.centers().is_empty());
        assert_eq!(stats.troughs_skipped, 1);
        assert_eq!(stats.positions_decoded, 0);
    }

    #[test]
    fn test_incomplete_and_malformed_centers() {
        let mut builder = PressureCenterBuilder::new();
        let mut stats = DecodeStats::new();

        // Lone group has no position
        builder.process_line(&tokens(&["81978"]), NORTH, &mut stats);
        // Pressure digits missing
        builder.process_line(&tokens(&["819//", "55200"]), NORTH, &mut stats);
        // Position missing
        builder.process_line(&tokens(&["81978", "5520/"]), NORTH, &mut stats);

        assert!(builder.centers().is_empty());
        assert_eq!(stats.malformed_groups, 1);
        assert_eq!(stats.positions_rejected, 1);
    }

    #[test]
    fn test_unsupported_mode_emits_no_center() {
        let mut builder = PressureCenterBuilder::new();
        let mut stats = DecodeStats::new();

        builder.process_line(&tokens(&["81978", "55200"]), COMPASS, &mut stats);

        assert!(builder.finish().is_empty());
        assert_eq!(stats.positions_rejected, 1);
    }
}

mod front_tests {
    use super::*;

    #[test]
    fn test_front_start_line() {
        let mut builder = FrontBuilder::new();
        let mut stats = DecodeStats::new();

        builder.process_line(&tokens(&["66420", "50200", "51150"]), NORTH, &mut stats);

        let front = builder.current().unwrap();
        assert_eq!(front.front_type, FrontType::Cold);
        assert_eq!(
            front.points,
            vec![GeoPoint::new(50.0, 20.0), GeoPoint::new(51.0, 15.0)]
        );
    }

    #[test]
    fn test_continuation_accumulates_in_order() {
        let mut builder = FrontBuilder::new();
        let mut stats = DecodeStats::new();

        builder.process_line(&tokens(&["66220", "50200"]), NORTH, &mut stats);
        builder.process_line(&tokens(&["empty", "51150", "52100"]), NORTH, &mut stats);
        builder.process_line(&tokens(&["empty", "53050", "54000"]), NORTH, &mut stats);

        // Unrelated line ends the run
        builder.process_line(&tokens(&["12345", "67890"]), NORTH, &mut stats);
        builder.process_line(&tokens(&["empty", "55000", "56000"]), NORTH, &mut stats);

        let fronts = builder.finish();
        assert_eq!(fronts.len(), 1);
        assert_eq!(fronts[0].front_type, FrontType::Warm);

        let latitudes: Vec<f64> = fronts[0].points.iter().map(|p| p.latitude).collect();
        assert_eq!(latitudes, vec![50.0, 51.0, 52.0, 53.0, 54.0]);
    }

    #[test]
    fn test_continuation_without_current_front() {
        let mut builder = FrontBuilder::new();
        let mut stats = DecodeStats::new();

        builder.process_line(&tokens(&["empty", "51150", "52100"]), NORTH, &mut stats);

        assert!(builder.fronts().is_empty());
        assert_eq!(stats.positions_decoded, 0);
    }

    #[test]
    fn test_unknown_front_type_still_creates_front() {
        let mut builder = FrontBuilder::new();
        let mut stats = DecodeStats::new();

        builder.process_line(&tokens(&["66/20", "50200"]), NORTH, &mut stats);
        builder.process_line(&tokens(&["empty", "51150"]), NORTH, &mut stats);

        let fronts = builder.finish();
        assert_eq!(fronts.len(), 1);
        assert_eq!(fronts[0].front_type, FrontType::Unknown);
        assert_eq!(fronts[0].points.len(), 2);
    }

    #[test]
    fn test_bad_points_are_skipped() {
        let mut builder = FrontBuilder::new();
        let mut stats = DecodeStats::new();

        builder.process_line(&tokens(&["66620", "5020/", "51155"]), NORTH, &mut stats);

        let front = builder.current().unwrap();
        assert_eq!(front.front_type, FrontType::Occlusion);
        assert_eq!(front.points, vec![GeoPoint::new(51.0, -15.0)]);
        assert_eq!(stats.positions_rejected, 1);
    }

    #[test]
    fn test_lone_front_group_ends_continuation() {
        let mut builder = FrontBuilder::new();
        let mut stats = DecodeStats::new();

        builder.process_line(&tokens(&["66420", "50200"]), NORTH, &mut stats);
        builder.process_line(&tokens(&["90101", "66420"]), NORTH, &mut stats);
        builder.process_line(&tokens(&["empty", "51150"]), NORTH, &mut stats);

        let fronts = builder.finish();
        assert_eq!(fronts.len(), 1);
        assert_eq!(fronts[0].points.len(), 1);
    }

    #[test]
    fn test_unsupported_mode_produces_no_points() {
        let mut builder = FrontBuilder::new();
        let mut stats = DecodeStats::new();

        builder.process_line(&tokens(&["66420", "50200", "51150"]), COMPASS, &mut stats);
        builder.process_line(&tokens(&["empty", "52100"]), COMPASS, &mut stats);

        let fronts = builder.finish();
        assert_eq!(fronts.len(), 1);
        assert!(fronts[0].points.is_empty());
        assert_eq!(stats.positions_rejected, 3);
    }
}

mod isobar_tests {
    use super::*;

    #[test]
    fn test_isobar_expansion_law() {
        for code in 0..1000 {
            let expected = if code < 500 { code + 1000 } else { code };
            assert_eq!(expand_isobar_value(code), expected, "code {:03}", code);
        }
        assert_eq!(expand_isobar_value(20), 1020);
        assert_eq!(expand_isobar_value(960), 960);
    }

    #[test]
    fn test_isobar_with_continuation() {
        let mut builder = IsobarBuilder::new();
        let mut stats = DecodeStats::new();

        builder.process_line(&tokens(&["44020", "40200", "41150"]), NORTH, &mut stats);
        builder.process_line(&tokens(&["empty", "42100"]), NORTH, &mut stats);
        builder.process_line(&tokens(&["44996", "58207"]), NORTH, &mut stats);

        let isobars = builder.finish();
        assert_eq!(isobars.len(), 2);
        assert_eq!(isobars[0].value_hpa, 1020);
        assert_eq!(isobars[0].points.len(), 3);
        assert_eq!(isobars[1].value_hpa, 996);
        assert_eq!(isobars[1].points, vec![GeoPoint::new(58.0, -20.5)]);
    }

    #[test]
    fn test_malformed_value_ends_continuation() {
        let mut builder = IsobarBuilder::new();
        let mut stats = DecodeStats::new();

        builder.process_line(&tokens(&["44020", "40200"]), NORTH, &mut stats);
        builder.process_line(&tokens(&["44/20", "41150"]), NORTH, &mut stats);
        builder.process_line(&tokens(&["empty", "42100"]), NORTH, &mut stats);

        assert!(builder.current().is_none());
        let isobars = builder.finish();
        assert_eq!(isobars.len(), 1);
        assert_eq!(isobars[0].points.len(), 1);
        assert_eq!(stats.malformed_groups, 1);
    }

    #[test]
    fn test_unsupported_mode_produces_no_points() {
        let mut builder = IsobarBuilder::new();
        let mut stats = DecodeStats::new();

        builder.process_line(&tokens(&["44020", "40200"]), COMPASS, &mut stats);

        let isobars = builder.finish();
        assert_eq!(isobars.len(), 1);
        assert!(isobars[0].points.is_empty());
    }
}
