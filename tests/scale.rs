use rocketviz::{metric_range, padded_range, AxisRange, Metric, TelemetryRecord};

#[test]
fn pads_the_maximum_by_twenty_percent() {
    let r = padded_range([100.0, 150.0, 200.0]);
    assert_eq!(r.min, 0.0);
    assert!((r.max - 240.0).abs() < 1e-9);
}

#[test]
fn empty_input_is_zero_range() {
    assert_eq!(padded_range(Vec::<f64>::new()), AxisRange::ZERO);
    assert!(AxisRange::ZERO.is_degenerate());
}

#[test]
fn all_zero_input_is_zero_range() {
    let r = padded_range([0.0, 0.0, 0.0]);
    assert_eq!(r, AxisRange::ZERO);
}

#[test]
fn nan_propagates_to_the_maximum() {
    assert!(padded_range([1.0, f64::NAN, 3.0]).max.is_nan());
    assert!(padded_range([f64::NAN, 3.0]).max.is_nan());
}

#[test]
fn metric_range_reads_only_that_metric() {
    let records = [
        TelemetryRecord { altitude: Some(500.0), velocity: Some(20.0), ..Default::default() },
        TelemetryRecord { altitude: Some(1000.0), velocity: Some(10.0), ..Default::default() },
    ];
    assert!((metric_range(&records, Metric::Altitude).max - 1200.0).abs() < 1e-9);
    assert!((metric_range(&records, Metric::Velocity).max - 24.0).abs() < 1e-9);
}

#[test]
fn orientation_records_have_no_altitude() {
    let records = [TelemetryRecord { pitch: 5.0, ..Default::default() }];
    assert_eq!(metric_range(&records, Metric::Altitude), AxisRange::ZERO);
}

#[test]
fn nan_bounds_are_degenerate() {
    assert!(padded_range([1.0, f64::NAN]).is_degenerate());
    assert!(AxisRange { min: f64::NAN, max: 1.0 }.is_degenerate());
    assert!(!padded_range([10.0]).is_degenerate());
}
