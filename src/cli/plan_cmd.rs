// Copyright 2024-2026 printq Contributors
// SPDX-License-Identifier: Apache-2.0

//! Plan CLI subcommand.
//!
//! Reads a JSON plan request, packs it onto plates and prints the report.

use std::path::PathBuf;

use tracing::info;
use uuid::Uuid;

use super::report::{render_json, render_table, PlanReport};
use super::{EXIT_INPUT_ERROR, EXIT_OK, EXIT_UNSCHEDULABLE};
use crate::config::EnvConfig;
use crate::input::{decode_request, ConstraintsRecord, InputError, PlanRequest};
use crate::scheduler::{BatchPlanner, PlateConstraints, PrintJob, ScheduleError};
use crate::telemetry::{record_plan_failure, record_plan_success, PlanSpan, SpanExt};

/// Arguments of `plan`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanArgs {
    pub jobs_path: PathBuf,
    pub max_volume: Option<f64>,
    pub max_items: Option<i64>,
    pub json: bool,
    pub config_path: Option<PathBuf>,
}

impl PlanArgs {
    /// Parse the arguments following `plan`.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut parsed = PlanArgs::default();
        let mut jobs_path = None;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--jobs" => {
                    jobs_path = Some(PathBuf::from(value_of(args, i)?));
                    i += 2;
                }
                "--max-volume" => {
                    let raw = value_of(args, i)?;
                    let v = raw
                        .parse::<f64>()
                        .map_err(|_| format!("Invalid value for --max-volume: {}", raw))?;
                    parsed.max_volume = Some(v);
                    i += 2;
                }
                "--max-items" => {
                    let raw = value_of(args, i)?;
                    let v = raw
                        .parse::<i64>()
                        .map_err(|_| format!("Invalid value for --max-items: {}", raw))?;
                    parsed.max_items = Some(v);
                    i += 2;
                }
                "--config" => {
                    parsed.config_path = Some(PathBuf::from(value_of(args, i)?));
                    i += 2;
                }
                "--json" => {
                    parsed.json = true;
                    i += 1;
                }
                other => return Err(format!("Unknown argument: {}", other)),
            }
        }

        parsed.jobs_path = jobs_path.ok_or_else(|| "Missing required --jobs FILE".to_string())?;
        Ok(parsed)
    }
}

fn value_of(args: &[String], i: usize) -> Result<&str, String> {
    args.get(i + 1)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("Missing value for {}", args[i]))
}

/// Plan `jobs` and build a report, with span and metrics around the run.
pub fn execute(
    jobs: Vec<PrintJob>,
    constraints: PlateConstraints,
) -> Result<PlanReport, ScheduleError> {
    let plan_id = Uuid::new_v4();
    let span = PlanSpan::new(&plan_id.to_string(), jobs.len());
    let _enter = span.enter();

    let result = BatchPlanner::new(constraints).create_batches(jobs);
    span.record_result(&result);

    match result {
        Ok(plan) => {
            span.record("batches", plan.batches.len());
            span.record("total_time", plan.total_time());
            record_plan_success(&plan);
            info!(
                batches = plan.batches.len(),
                jobs = plan.job_count(),
                total_time = plan.total_time(),
                "print plan complete"
            );
            Ok(PlanReport::new(plan_id, constraints, &plan))
        }
        Err(e) => {
            record_plan_failure();
            Err(e)
        }
    }
}

/// Resolve plate limits and validate the backlog.
///
/// Precedence: command-line flags, then the request file, then config.
pub fn prepare(
    mut request: PlanRequest,
    args: &PlanArgs,
    config: &EnvConfig,
) -> Result<(Vec<PrintJob>, PlateConstraints), InputError> {
    let fallback = config.constraints_record();
    if args.max_volume.is_some() || args.max_items.is_some() {
        let base = request.constraints.unwrap_or(fallback);
        request.constraints = Some(ConstraintsRecord {
            max_volume: args.max_volume.unwrap_or(base.max_volume),
            max_items: args.max_items.unwrap_or(base.max_items),
        });
    }
    request.into_parts(fallback)
}

/// Run `plan`. Returns the process exit code.
pub fn run_plan(args: &PlanArgs, config: &EnvConfig) -> i32 {
    let data = match std::fs::read(&args.jobs_path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error reading {}: {}", args.jobs_path.display(), e);
            return EXIT_INPUT_ERROR;
        }
    };

    let prepared = decode_request(&data).and_then(|request| prepare(request, args, config));
    let (jobs, constraints) = match prepared {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_INPUT_ERROR;
        }
    };

    match execute(jobs, constraints) {
        Ok(report) => {
            if args.json {
                match render_json(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error encoding report: {}", e);
                        return EXIT_INPUT_ERROR;
                    }
                }
            } else {
                print!("{}", render_table(&report));
            }
            EXIT_OK
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Remove job '{}' or raise the plate limits and retry.", e.job_id());
            EXIT_UNSCHEDULABLE
        }
    }
}
