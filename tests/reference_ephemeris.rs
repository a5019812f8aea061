//! End-to-end checks of the public API against published lunar data

use approx::assert_abs_diff_eq;
use chrono::{Duration, NaiveDate};
use moonfield::report::TransitKind;
use moonfield::{CalendarDate, EclipseVerdict, MoonCalculator, MoonfieldError, ObserverConfig, PhaseName};
use rstest::rstest;
use std::io::Write;

fn date(day: f64, month: u32, year: i32) -> CalendarDate {
    CalendarDate::new(day, month, year).unwrap()
}

#[test]
fn test_meeus_example_position() {
    // Meeus, Astronomical Algorithms, example 47.a
    let moon = MoonCalculator::new().position(&date(12.0, 4, 1992));

    assert_abs_diff_eq!(moon.geometric_longitude.to_degrees(), 133.162655, epsilon = 1e-5);
    assert_abs_diff_eq!(moon.latitude.to_degrees(), -3.229126, epsilon = 1e-5);
    assert_abs_diff_eq!(moon.distance_km, 368409.7, epsilon = 0.1);
    assert_abs_diff_eq!(moon.right_ascension().to_degrees(), 134.688470, epsilon = 1e-5);
    assert_abs_diff_eq!(moon.declination().to_degrees(), 13.768368, epsilon = 1e-5);
}

#[test]
fn test_report_for_new_york_latitude() {
    let report = MoonCalculator::new()
        .with_latitude(40.0)
        .with_timezone_offset(-5.0)
        .calculate(&date(12.0, 4, 1992))
        .unwrap();

    assert_eq!(report.phase, PhaseName::WaxingGibbous);
    assert_eq!(report.illumination_percent, 69.6);
    assert_eq!(report.hour_angle_deg, Some(101.694));
    let rise = report.rise.unwrap();
    assert_eq!((rise.hour.as_str(), rise.minute.as_str()), ("10", "45"));
    assert_eq!(report.eclipse, EclipseVerdict::NoEclipse);
}

#[rstest]
#[case(8.0, 4, 2024, EclipseVerdict::SolarEclipse)]
#[case(14.0, 3, 2025, EclipseVerdict::LunarEclipse)]
#[case(25.0, 1, 2024, EclipseVerdict::NoEclipse)]
fn test_eclipse_in_report(
    #[case] day: f64,
    #[case] month: u32,
    #[case] year: i32,
    #[case] expected: EclipseVerdict,
) {
    let report = MoonCalculator::new().calculate(&date(day, month, year)).unwrap();
    assert_eq!(report.eclipse, expected);
}

#[test]
fn test_daily_reports_stay_physical() {
    let calculator = MoonCalculator::new().with_latitude(45.0).with_timezone_offset(1.0);
    let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();

    for offset in 0..3000 {
        let day = start + Duration::days(offset);
        let report = calculator
            .calculate(&CalendarDate::from_naive_date(day).unwrap())
            .unwrap();

        assert!((0.0..360.0).contains(&report.right_ascension_deg), "RA on {}", day);
        assert!(report.declination_deg.abs() < 29.5, "Dec on {}", day);
        assert!(
            (355_000.0..407_500.0).contains(&report.position.distance_km),
            "distance on {}",
            day
        );
        assert!((0.0..=100.0).contains(&report.illumination_percent));
        // |Dec| < 29.5° never goes circumpolar at 45°
        assert_eq!(report.transit, TransitKind::Crosses);
        assert!(report.rise.is_some());
    }
}

#[test]
fn test_arctic_observer_sees_circumpolar_moon() {
    let calculator = MoonCalculator::new().with_latitude(80.0);
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let mut above = 0;
    let mut below = 0;
    for offset in 0..30 {
        let day = start + Duration::days(offset);
        let report = calculator
            .calculate(&CalendarDate::from_naive_date(day).unwrap())
            .unwrap();
        match report.transit {
            TransitKind::AlwaysAbove => above += 1,
            TransitKind::NeverAbove => below += 1,
            TransitKind::Crosses => assert!(report.rise.is_some()),
        }
    }
    assert!(above > 0 && below > 0);
}

#[test]
fn test_config_file_drives_calculator() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"latitude_deg": 40.0, "timezone_offset_hours": -5.0}}"#).unwrap();

    let config = ObserverConfig::from_json_file(file.path()).unwrap();
    let report = MoonCalculator::from_config(config)
        .calculate(&date(12.0, 4, 1992))
        .unwrap();
    assert_eq!(report.rise.unwrap().hour, "10");
}

#[test]
fn test_invalid_inputs_surface_as_errors() {
    assert!(CalendarDate::new(0.5, 1, 2000).is_err());
    assert!(CalendarDate::new(1.0, 1, 1899).is_err());

    let err = MoonCalculator::new()
        .with_timezone_offset(25.0)
        .calculate(&date(1.0, 1, 2000))
        .unwrap_err();
    assert!(matches!(err, MoonfieldError::Observer(_)));
}

#[test]
fn test_report_json_shape() {
    let report = MoonCalculator::new()
        .with_latitude(40.0)
        .calculate(&date(12.0, 4, 1992))
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["phase"], "Waxing Gibbous");
    assert_eq!(json["transit"], "crosses");
    assert_eq!(json["shading"]["dark_half"], "left");
    assert_eq!(json["shading"]["terminator"]["lit"], true);
    assert!(json["orbit"]["moon_angle"].is_number());
}
