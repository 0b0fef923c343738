use fitness_tracker_core::{
    run, sample_packages, ErrorPolicy, Metrics, Package, RunConfig, RunReport,
};

fn run_to_string(
    packages: Vec<Package>,
    cfg: &RunConfig,
) -> (anyhow::Result<RunReport>, String, Metrics) {
    let metrics = Metrics::new().expect("metrics");
    let mut out = Vec::new();
    let result = run(packages, cfg, &metrics, &mut out);
    (result, String::from_utf8(out).expect("utf8"), metrics)
}

#[test]
fn sample_run_prints_one_line_per_package_in_order() {
    let (result, out, _) = run_to_string(sample_packages(), &RunConfig::default());
    let report = result.expect("run");
    assert_eq!(report, RunReport { printed: 3, skipped: 0 });

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Тип тренировки: Swimming;"));
    assert!(lines[1].starts_with("Тип тренировки: Running;"));
    assert!(lines[2].starts_with("Тип тренировки: SportsWalking;"));
}

#[test]
fn bad_packages_are_skipped_by_default() {
    let packages = vec![
        Package::new("XYZ", [1.0, 1.0, 1.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("SWM", [720.0, 1.0]),
    ];
    let (result, out, metrics) = run_to_string(packages, &RunConfig::default());
    assert_eq!(result.unwrap(), RunReport { printed: 1, skipped: 2 });
    assert_eq!(out.lines().count(), 1);
    assert_eq!(metrics.rejected_total("unknown_workout_type").get(), 1);
    assert_eq!(metrics.rejected_total("malformed_reading").get(), 1);
}

#[test]
fn abort_policy_stops_at_first_error() {
    let cfg = RunConfig { on_error: ErrorPolicy::Abort };
    let packages = vec![
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("XYZ", [1.0, 1.0, 1.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ];
    let (result, out, _) = run_to_string(packages, &cfg);
    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("unknown workout type"), "{err:#}");
    assert!(err.to_string().contains("package #1 (XYZ)"));
    // første linje ble skrevet før feilen
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn empty_source_prints_nothing() {
    let (result, out, _) = run_to_string(Vec::new(), &RunConfig::default());
    assert_eq!(result.unwrap(), RunReport::default());
    assert!(out.is_empty());
}
