//! End-to-end tests for the plan command.

use std::io::Write;

use printq_core::cli::{
    execute, render_table, run_plan, scenarios, PlanArgs, EXIT_INPUT_ERROR, EXIT_OK,
    EXIT_UNSCHEDULABLE,
};
use printq_core::config::EnvConfig;
use printq_core::scheduler::PlateConstraints;
use printq_core::telemetry::LogConfig;

fn default_config() -> EnvConfig {
    EnvConfig {
        max_volume: 300.0,
        max_items: 2,
        log: LogConfig::default(),
        config_file: None,
    }
}

fn request_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn args_for(file: &tempfile::NamedTempFile, extra: &[&str]) -> PlanArgs {
    let mut args = vec!["--jobs".to_string(), file.path().display().to_string()];
    args.extend(extra.iter().map(|s| s.to_string()));
    PlanArgs::parse(&args).unwrap()
}

#[test]
fn plan_succeeds_for_valid_request() {
    let file = request_file(
        r#"{"jobs": [
            {"id": "M1", "volume": 100, "priority": 1, "print_time": 120},
            {"id": "M2", "volume": 150, "priority": 1, "print_time": 90}
        ]}"#,
    );
    assert_eq!(run_plan(&args_for(&file, &[]), &default_config()), EXIT_OK);
    assert_eq!(run_plan(&args_for(&file, &["--json"]), &default_config()), EXIT_OK);
}

#[test]
fn plan_reports_unschedulable_backlog() {
    let file = request_file(
        r#"{"jobs": [{"id": "tower", "volume": 400, "priority": 1, "print_time": 600}]}"#,
    );
    assert_eq!(
        run_plan(&args_for(&file, &[]), &default_config()),
        EXIT_UNSCHEDULABLE
    );
    // Raising the plate limit makes the same backlog plannable.
    assert_eq!(
        run_plan(&args_for(&file, &["--max-volume", "400"]), &default_config()),
        EXIT_OK
    );
}

#[test]
fn plan_rejects_invalid_input() {
    let file = request_file(r#"{"jobs": [{"id": "M1", "volume": -1, "priority": 1, "print_time": 5}]}"#);
    assert_eq!(run_plan(&args_for(&file, &[]), &default_config()), EXIT_INPUT_ERROR);

    let file = request_file("{ not json");
    assert_eq!(run_plan(&args_for(&file, &[]), &default_config()), EXIT_INPUT_ERROR);

    let file = request_file(r#"{"jobs": []}"#);
    assert_eq!(
        run_plan(&args_for(&file, &["--max-items", "0"]), &default_config()),
        EXIT_INPUT_ERROR
    );
}

#[test]
fn plan_rejects_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let args = PlanArgs {
        jobs_path: dir.path().join("missing.json"),
        ..PlanArgs::default()
    };
    assert_eq!(run_plan(&args, &default_config()), EXIT_INPUT_ERROR);
}

#[test]
fn reference_scenarios_match_expected_plans() {
    let expected = [
        (vec!["M2", "M1", "M3"], 270.0),
        (vec!["M2", "M1", "M3"], 270.0),
        (vec!["M2", "M1", "M3"], 450.0),
    ];
    for (scenario, (order, total)) in scenarios().into_iter().zip(expected) {
        let report = execute(scenario.jobs, PlateConstraints::default()).unwrap();
        assert_eq!(report.order, order, "{}", scenario.title);
        assert_eq!(report.total_time, total, "{}", scenario.title);
        assert!(render_table(&report).contains(&format!("Total time: {} minutes", total)));
    }
}
