#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_constants() {
    let cfg = EditorConfig::default();
    assert_eq!(cfg.lane_height, 180.0);
    assert_eq!(cfg.min_canvas_height, 600.0);
    assert_eq!(cfg.canvas_width, 2000.0);
}

#[test]
fn lookup_without_values_uses_defaults() {
    let cfg = EditorConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, EditorConfig::default());
}

#[test]
fn lookup_parses_overrides() {
    let cfg = EditorConfig::from_lookup(lookup_from(&[
        ("SWIMLANE_LANE_HEIGHT", "120"),
        ("SWIMLANE_MIN_CANVAS_HEIGHT", " 400.5 "),
        ("SWIMLANE_CANVAS_WIDTH", "1500"),
    ]))
    .unwrap();
    assert_eq!(cfg.lane_height, 120.0);
    assert_eq!(cfg.min_canvas_height, 400.5);
    assert_eq!(cfg.canvas_width, 1500.0);
}

#[test]
fn lookup_rejects_garbage() {
    let err = EditorConfig::from_lookup(lookup_from(&[("SWIMLANE_LANE_HEIGHT", "tall")])).unwrap_err();
    assert_eq!(err, ConfigError::Parse { var: "SWIMLANE_LANE_HEIGHT".into(), value: "tall".into() });
}

#[test]
fn lookup_rejects_zero_and_negative() {
    let err = EditorConfig::from_lookup(lookup_from(&[("SWIMLANE_LANE_HEIGHT", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { .. }));

    let err = EditorConfig::from_lookup(lookup_from(&[("SWIMLANE_CANVAS_WIDTH", "-5")])).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { ref var, .. } if var == "SWIMLANE_CANVAS_WIDTH"));
}

#[test]
fn lookup_rejects_non_finite() {
    let err = EditorConfig::from_lookup(lookup_from(&[("SWIMLANE_MIN_CANVAS_HEIGHT", "inf")])).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { .. }));
}

#[test]
fn validate_accepts_defaults_and_rejects_nan() {
    assert!(EditorConfig::default().validate().is_ok());
    let bad = EditorConfig { lane_height: f64::NAN, ..EditorConfig::default() };
    assert!(bad.validate().is_err());
}

#[test]
fn error_messages_name_the_variable() {
    let err = ConfigError::Parse { var: "SWIMLANE_LANE_HEIGHT".into(), value: "x".into() };
    assert_eq!(err.to_string(), "SWIMLANE_LANE_HEIGHT: cannot parse 'x' as a number");
}
