use rocketviz::{parse_row, parse_sequence, Column, ParsePolicy, SourceKind, TelemetryError};

#[test]
fn orientation_rows_map_to_named_fields() {
    let seq = parse_sequence("h\n1,2,3,4\n5,6,7,8", SourceKind::Orientation, ParsePolicy::Lenient).unwrap();
    assert_eq!(seq.len(), 2);
    let first = seq[0];
    assert_eq!(first.timestamp, 1.0);
    assert_eq!(first.pitch, 2.0);
    assert_eq!(first.roll, 3.0);
    assert_eq!(first.yaw, 4.0);
    assert_eq!(first.altitude, None);
    assert_eq!(seq[1].timestamp, 5.0);
}

#[test]
fn flight_rows_use_flight_column_order() {
    let text = "timestamp,pitch,yaw,roll,altitude,velocity\n0.4,10,20,30,1500,12.5\n";
    let seq = parse_sequence(text, SourceKind::Flight, ParsePolicy::Lenient).unwrap();
    assert_eq!(seq.len(), 1);
    let r = seq[0];
    assert_eq!((r.pitch, r.yaw, r.roll), (10.0, 20.0, 30.0));
    assert_eq!(r.altitude, Some(1500.0));
    assert_eq!(r.velocity, Some(12.5));
    assert_eq!(seq.kind(), SourceKind::Flight);
}

#[test]
fn header_only_and_empty_text_give_empty_sequences() {
    assert!(parse_sequence("", SourceKind::Flight, ParsePolicy::Lenient).unwrap().is_empty());
    assert!(parse_sequence("timestamp,pitch,roll,yaw\n", SourceKind::Orientation, ParsePolicy::Lenient)
        .unwrap()
        .is_empty());
}

#[test]
fn blank_lines_and_crlf_are_tolerated() {
    let text = "h\r\n1,2,3,4\r\n\r\n5, 6 ,7,8\r\n";
    let seq = parse_sequence(text, SourceKind::Orientation, ParsePolicy::Strict).unwrap();
    assert_eq!(seq.len(), 2);
    assert_eq!(seq[1].pitch, 6.0);
}

#[test]
fn lenient_policy_keeps_malformed_rows_as_nan() {
    let text = "h\n1,abc,3,4\n2,2,3,4";
    let seq = parse_sequence(text, SourceKind::Orientation, ParsePolicy::Lenient).unwrap();
    assert_eq!(seq.len(), 2, "no row is dropped");
    assert!(seq[0].pitch.is_nan());
    assert_eq!(seq[0].roll, 3.0);
    assert_eq!(seq[1].pitch, 2.0);
}

#[test]
fn strict_policy_reports_line_and_column() {
    let text = "h\n1,2,3,4\n2,2,x,4";
    let err = parse_sequence(text, SourceKind::Orientation, ParsePolicy::Strict).unwrap_err();
    match err {
        TelemetryError::MalformedRow(row) => {
            assert_eq!(row.line, 3);
            assert_eq!(row.issues.len(), 1);
            assert_eq!(row.issues[0].column, Column::Roll);
            assert_eq!(row.issues[0].raw.as_deref(), Some("x"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn short_rows_mark_missing_columns() {
    let bad = parse_row(&["1", "2", "3", "4"], SourceKind::Flight, 7).unwrap_err();
    let cols: Vec<Column> = bad.issues.iter().map(|i| i.column).collect();
    assert_eq!(cols, vec![Column::Altitude, Column::Velocity]);
    assert!(bad.issues.iter().all(|i| i.raw.is_none()));
    assert!(bad.coerced.altitude.unwrap().is_nan());
    assert_eq!(bad.coerced.roll, 4.0);
    assert!(bad.to_string().contains("line 7"));
}

#[test]
fn extra_fields_are_ignored() {
    let rec = parse_row(&["1", "2", "3", "4", "99"], SourceKind::Orientation, 2).unwrap();
    assert_eq!(rec.yaw, 4.0);
}

#[test]
fn empty_field_is_malformed() {
    let bad = parse_row(&["1", "", "3", "4"], SourceKind::Orientation, 2).unwrap_err();
    assert_eq!(bad.issues[0].column, Column::Pitch);
    assert!(bad.coerced.pitch.is_nan());
}

#[test]
fn series_extracts_one_metric_in_order() {
    let text = "h\n0,1,2,3,10,5\n1,1,2,3,20,6\n";
    let seq = parse_sequence(text, SourceKind::Flight, ParsePolicy::Strict).unwrap();
    assert_eq!(seq.series(rocketviz::Metric::Altitude), vec![10.0, 20.0]);
    assert_eq!(seq.series(rocketviz::Metric::Yaw), vec![2.0, 2.0]);
}

#[test]
fn stray_quote_does_not_swallow_following_lines() {
    let seq = parse_sequence("h\n1,\"2,3,4\n5,6,7,8", SourceKind::Orientation, ParsePolicy::Lenient).unwrap();
    assert_eq!(seq.len(), 2);
    assert!(seq[0].pitch.is_nan());
    assert_eq!(seq[0].roll, 3.0);
    assert_eq!(seq[1].timestamp, 5.0);
    assert_eq!(seq[1].yaw, 8.0);
}

#[test]
fn separator_only_and_whitespace_lines_are_kept() {
    let seq = parse_sequence("h\n1,2,3,4\n,,,\n5,6,7,8", SourceKind::Orientation, ParsePolicy::Lenient).unwrap();
    assert_eq!(seq.len(), 3);
    assert!(seq[1].timestamp.is_nan());
    assert!(seq[1].yaw.is_nan());
    assert_eq!(seq[2].timestamp, 5.0);

    let seq = parse_sequence("h\n1,2,3,4\n   \n5,6,7,8", SourceKind::Orientation, ParsePolicy::Lenient).unwrap();
    assert_eq!(seq.len(), 3);
    assert!(seq[1].pitch.is_nan());
}

#[test]
fn separator_only_line_fails_under_strict_policy() {
    let err = parse_sequence("h\n1,2,3,4\n,,,\n", SourceKind::Orientation, ParsePolicy::Strict).unwrap_err();
    match err {
        TelemetryError::MalformedRow(row) => {
            assert_eq!(row.line, 3);
            assert_eq!(row.issues.len(), 4);
        }
        other => panic!("unexpected error: {other}"),
    }
}
