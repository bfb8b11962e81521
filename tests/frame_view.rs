use rocketviz::{
    format_timestamp_label, parse_sequence, FrameView, Metric, ParsePolicy, SourceKind, TelemetrySequence,
    TelemetrySources, DEFAULT_INTERPOLATION_STEPS, DEFAULT_WINDOW_SIZE,
};

fn flight(n: usize) -> TelemetrySequence {
    let mut text = String::from("timestamp,pitch,yaw,roll,altitude,velocity\n");
    for i in 0..n {
        let t = i as f64 * 0.4;
        text.push_str(&format!("{t},{i},{},{},{},{}\n", i * 2, i * 3, (i + 1) * 100, i + 1));
    }
    parse_sequence(&text, SourceKind::Flight, ParsePolicy::Strict).unwrap()
}

#[test]
fn not_ready_while_a_source_is_empty() {
    let sources = TelemetrySources::new(TelemetrySequence::empty(SourceKind::Orientation), flight(10));
    assert!(!sources.is_ready());
    assert!(FrameView::compute(&sources, 0, DEFAULT_WINDOW_SIZE, DEFAULT_INTERPOLATION_STEPS).is_none());
}

#[test]
fn windows_path_and_ranges_follow_the_frame() {
    let sources = TelemetrySources::from_flight(flight(50));
    let view = FrameView::compute(&sources, 40, DEFAULT_WINDOW_SIZE, DEFAULT_INTERPOLATION_STEPS).unwrap();
    assert_eq!(view.frame, 40);
    assert_eq!(view.cycle_len, 50);
    assert_eq!(view.orientation.len(), 30);
    assert_eq!(view.flight.len(), 30);
    assert_eq!(view.current.pitch, 40.0);
    assert_eq!(view.path.len(), 29 * 5 + 1);
    // altitude of record 40 is 4100
    assert!((view.altitude_range.max - 4100.0 * 1.2).abs() < 1e-6);
    assert!((view.velocity_range.max - 41.0 * 1.2).abs() < 1e-9);
}

#[test]
fn shorter_source_bounds_the_cycle() {
    let orientation = parse_sequence("h\n0,1,2,3\n1,4,5,6\n2,7,8,9", SourceKind::Orientation, ParsePolicy::Strict).unwrap();
    let sources = TelemetrySources::new(orientation, flight(10));
    assert_eq!(sources.cycle_len(), 3);
    let view = FrameView::compute(&sources, 4, 30, 4).unwrap();
    assert_eq!(view.frame, 1, "frames wrap into the shorter cycle");
    assert_eq!(view.current.roll, 5.0);
    assert_eq!(view.flight.len(), 2);
}

#[test]
fn series_pairs_timestamps_with_values() {
    let sources = TelemetrySources::from_flight(flight(3));
    let view = FrameView::compute(&sources, 2, 30, 4).unwrap();
    let alt = view.series(Metric::Altitude);
    assert_eq!(alt.len(), 3);
    assert_eq!(alt[2][1], 300.0);
    assert!((alt[2][0] - 0.8).abs() < 1e-12);
    assert_eq!(view.series(Metric::Yaw)[1], [0.4, 2.0]);
}

#[test]
fn timestamp_labels_have_one_decimal() {
    assert_eq!(format_timestamp_label(1.24), "1.2");
    assert_eq!(format_timestamp_label(3.0), "3.0");
    assert_eq!(format_timestamp_label(0.46), "0.5");
}
