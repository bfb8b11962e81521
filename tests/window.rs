use rocketviz::{window, window_range, SourceKind, TelemetryRecord, TelemetrySequence, DEFAULT_WINDOW_SIZE};

fn seq(n: usize) -> TelemetrySequence {
    let records = (0..n)
        .map(|i| TelemetryRecord {
            timestamp: i as f64 * 0.4,
            pitch: i as f64,
            ..Default::default()
        })
        .collect();
    TelemetrySequence::new(SourceKind::Orientation, records)
}

#[test]
fn early_frames_start_at_zero() {
    assert_eq!(window_range(10, 30), 0..11);
    let s = seq(50);
    let w = s.window(10, 30);
    assert_eq!(w.len(), 11);
    assert_eq!(w[0].pitch, 0.0);
    assert_eq!(w[10].pitch, 10.0);
}

#[test]
fn later_frames_keep_the_last_size_records() {
    assert_eq!(window_range(40, 30), 11..41);
    let s = seq(50);
    let w = s.window(40, DEFAULT_WINDOW_SIZE);
    assert_eq!(w.len(), 30);
    assert_eq!(w.first().unwrap().pitch, 11.0);
    assert_eq!(w.last().unwrap().pitch, 40.0);
}

#[test]
fn length_is_min_of_size_and_frame_plus_one() {
    let items: Vec<usize> = (0..100).collect();
    for frame in 0..100 {
        for size in 1..40 {
            assert_eq!(window(&items, frame, size).len(), size.min(frame + 1));
        }
    }
}

#[test]
fn frame_zero_is_never_empty() {
    let items = [7];
    assert_eq!(window(&items, 0, 30), &[7]);
}

#[test]
fn frames_past_the_end_are_clamped() {
    let items: Vec<usize> = (0..5).collect();
    assert_eq!(window(&items, 12, 3), &[2, 3, 4]);
}

#[test]
fn empty_input_gives_empty_window() {
    let items: [u8; 0] = [];
    assert!(window(&items, 0, 30).is_empty());
}

#[test]
fn source_is_left_untouched() {
    let s = seq(10);
    let before = s.clone();
    let _ = s.window(5, 3);
    assert_eq!(s, before);
}
