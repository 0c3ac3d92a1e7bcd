//! Tests for plan request decoding and validation.

use printq_core::input::{
    decode_request, validate_constraints, validate_jobs, ConstraintsRecord, InputError,
    JobRecord, MAX_JOBS,
};
use printq_core::scheduler::{schedule, PlateConstraints};

fn fallback() -> ConstraintsRecord {
    ConstraintsRecord {
        max_volume: 300.0,
        max_items: 2,
    }
}

fn record(id: &str, volume: f64) -> JobRecord {
    JobRecord {
        id: id.to_string(),
        volume,
        priority: 1,
        print_time: 10.0,
    }
}

#[test]
fn decodes_request_with_constraints() {
    let json = br#"{
        "constraints": {"max_volume": 250, "max_items": 3},
        "jobs": [
            {"id": "M1", "volume": 100, "priority": 2, "print_time": 120},
            {"id": "M2", "volume": 150.5, "priority": 1, "print_time": 90}
        ]
    }"#;

    let (jobs, constraints) = decode_request(json).unwrap().into_parts(fallback()).unwrap();
    assert_eq!(constraints, PlateConstraints { max_volume: 250.0, max_items: 3 });
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[1].id, "M2");
    assert_eq!(jobs[1].volume, 150.5);
    assert_eq!(jobs[1].priority, 1);
}

#[test]
fn missing_constraints_use_fallback() {
    let json = br#"{"jobs": []}"#;
    let (jobs, constraints) = decode_request(json).unwrap().into_parts(fallback()).unwrap();
    assert!(jobs.is_empty());
    assert_eq!(constraints, PlateConstraints::default());
}

#[test]
fn decoded_request_plans_end_to_end() {
    let json = br#"{"jobs": [
        {"id": "M1", "volume": 250, "priority": 1, "print_time": 180},
        {"id": "M2", "volume": 200, "priority": 1, "print_time": 150},
        {"id": "M3", "volume": 180, "priority": 2, "print_time": 120}
    ]}"#;
    let (jobs, constraints) = decode_request(json).unwrap().into_parts(fallback()).unwrap();
    let result = schedule(jobs, &constraints).unwrap();
    assert_eq!(result.order, vec!["M2", "M1", "M3"]);
    assert_eq!(result.total_time, 450.0);
}

#[test]
fn malformed_json_is_rejected() {
    let cases: [&[u8]; 5] = [
        b"not json",
        br#"{"jobs": [{"id": "M1"}]}"#,
        br#"{"jobs": [{"id": "M1", "volume": 1, "priority": 1.5, "print_time": 5}]}"#,
        br#"{"jobs": [{"id": "M1", "volume": "big", "priority": 1, "print_time": 5}]}"#,
        br#"{"constraints": {"max_volume": 10}, "jobs": []}"#,
    ];
    for bad in cases {
        assert!(
            matches!(decode_request(bad), Err(InputError::Malformed(_))),
            "accepted: {}",
            String::from_utf8_lossy(bad)
        );
    }
}

#[test]
fn negative_volume_is_rejected() {
    let err = validate_jobs(vec![record("ok", 1.0), record("bad", -0.5)]).unwrap_err();
    assert!(matches!(err, InputError::InvalidJob { index: 1, .. }));
    assert!(err.to_string().contains("negative"));
}

#[test]
fn fractional_print_times_are_accepted() {
    let json = br#"{"jobs": [
        {"id": "M1", "volume": 100, "priority": 1, "print_time": 90.5},
        {"id": "M2", "volume": 100, "priority": 1, "print_time": 90.0},
        {"id": "M3", "volume": 100, "priority": 1, "print_time": 30}
    ]}"#;
    let (jobs, constraints) = decode_request(json).unwrap().into_parts(fallback()).unwrap();
    assert_eq!(jobs[0].print_time, 90.5);
    assert_eq!(jobs[1].print_time, 90.0);

    let result = schedule(jobs, &constraints).unwrap();
    assert_eq!(result.order, vec!["M3", "M2", "M1"]);
    assert_eq!(result.total_time, 90.0 + 90.5);
}

#[test]
fn negative_print_time_is_rejected() {
    let json = br#"{"jobs": [{"id": "M1", "volume": 1, "priority": 1, "print_time": -5}]}"#;
    let err = decode_request(json).unwrap().into_parts(fallback()).unwrap_err();
    assert!(matches!(err, InputError::InvalidJob { index: 0, .. }));
    assert!(err.to_string().contains("print_time"));
}

#[test]
fn non_finite_print_time_is_rejected() {
    for bad in [f64::NAN, f64::INFINITY] {
        let mut r = record("M1", 1.0);
        r.print_time = bad;
        let err = validate_jobs(vec![r]).unwrap_err();
        assert!(matches!(err, InputError::InvalidJob { index: 0, .. }));
    }
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = validate_jobs(vec![record("M1", 1.0), record("M2", 1.0), record("M1", 2.0)])
        .unwrap_err();
    assert!(matches!(err, InputError::DuplicateId(ref id) if id == "M1"));
}

#[test]
fn invalid_constraints_are_rejected() {
    assert!(validate_constraints(300.0, 0).is_err());
    assert!(validate_constraints(300.0, -3).is_err());
    assert!(validate_constraints(-1.0, 2).is_err());
    assert!(validate_constraints(f64::NAN, 2).is_err());
    assert!(validate_constraints(f64::INFINITY, 2).is_err());
    assert!(validate_constraints(0.0, 1).is_ok());
}

#[test]
fn invalid_request_constraints_win_over_valid_fallback() {
    let json = br#"{"constraints": {"max_volume": 300, "max_items": 0}, "jobs": []}"#;
    let err = decode_request(json).unwrap().into_parts(fallback()).unwrap_err();
    assert!(matches!(err, InputError::InvalidConstraints(_)));
}

#[test]
fn too_many_jobs_are_rejected() {
    let records: Vec<JobRecord> = (0..=MAX_JOBS).map(|i| record(&format!("J{}", i), 0.0)).collect();
    assert!(matches!(
        validate_jobs(records),
        Err(InputError::TooManyJobs { .. })
    ));
}
