use std::fs;

#[test]
fn log_files_split_metrics_from_diagnostics() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    granary::logging::init(dir.path(), "info").expect("failed to initialize logging");

    tracing::info!("plain diagnostic line");
    tracing::info!(
        target: granary::logging::METRICS_TARGET,
        file = "./data/sales.csv",
        row_price = 10.5_f64,
        total_rows = 1_u64,
        "row metrics"
    );

    let diag =
        fs::read_to_string(dir.path().join("granary.log")).expect("granary.log was not created");
    let metrics =
        fs::read_to_string(dir.path().join("metrics.log")).expect("metrics.log was not created");

    assert!(diag.contains("plain diagnostic line"));
    assert!(!diag.contains("row metrics"));
    assert!(!metrics.contains("plain diagnostic line"));

    let line = metrics.lines().next().expect("metrics.log has no lines");
    let event: serde_json::Value = serde_json::from_str(line).expect("metrics line is not JSON");
    assert_eq!(event["target"], "metrics");
    assert_eq!(event["fields"]["message"], "row metrics");
    assert_eq!(event["fields"]["file"], "./data/sales.csv");
    assert_eq!(event["fields"]["row_price"], 10.5);
    assert_eq!(event["fields"]["total_rows"], 1);
}
