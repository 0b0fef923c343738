use fitness_tracker_core::source::{packages_from_json, sample_packages, Package};
use fitness_tracker_core::{ErrorPolicy, RunConfig, TrackerError};

#[test]
fn sample_packages_keep_original_order() {
    let codes: Vec<String> = sample_packages().into_iter().map(|p| p.workout_type).collect();
    assert_eq!(codes, ["SWM", "RUN", "WLK"]);
}

#[test]
fn json_accepts_objects_and_legacy_pairs() {
    let json = r#"[
        {"workout_type": "RUN", "data": [15000, 1, 75]},
        {"code": "WLK", "data": [9000, 1, 75, 180]},
        ["SWM", [720, 1, 80, 25, 40]]
    ]"#;
    let packages = packages_from_json(json).expect("parse");
    assert_eq!(packages.len(), 3);
    assert_eq!(packages[0], Package::new("RUN", [15000.0, 1.0, 75.0]));
    assert_eq!(packages[1].workout_type, "WLK");
    assert_eq!(packages[2].data, vec![720.0, 1.0, 80.0, 25.0, 40.0]);
}

#[test]
fn json_with_non_numeric_field_reports_path() {
    let json = r#"[["RUN", [15000, 1, 75]], ["WLK", [9000, "one", 75, 180]]]"#;
    match packages_from_json(json) {
        Err(TrackerError::MalformedSource { path, .. }) => {
            assert!(path.starts_with("[1]"), "path was {path}");
        }
        other => panic!("expected MalformedSource, got {other:?}"),
    }
}

#[test]
fn json_that_is_not_a_list_is_rejected() {
    let err = packages_from_json(r#"{"workout_type": "RUN"}"#).unwrap_err();
    assert_eq!(err.reason(), "malformed_source");
}

#[test]
fn run_config_defaults_to_skip() {
    assert_eq!(RunConfig::default().on_error, ErrorPolicy::Skip);
    assert_eq!(RunConfig::from_json("{}").unwrap().on_error, ErrorPolicy::Skip);
}

#[test]
fn run_config_parses_abort_and_reports_bad_values() {
    let cfg = RunConfig::from_json(r#"{"on_error": "abort"}"#).unwrap();
    assert_eq!(cfg.on_error, ErrorPolicy::Abort);

    match RunConfig::from_json(r#"{"on_error": "retry"}"#) {
        Err(e @ TrackerError::Config { .. }) => {
            assert_eq!(e.reason(), "invalid_config");
            assert!(matches!(e, TrackerError::Config { ref path, .. } if path == "on_error"));
        }
        other => panic!("expected Config error, got {other:?}"),
    }
}
