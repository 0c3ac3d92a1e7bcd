// Copyright 2024-2026 printq Contributors
// SPDX-License-Identifier: Apache-2.0

//! Plan report rendering: fixed-width table or JSON.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::scheduler::{PlateConstraints, PrintPlan};

const JOBS_COLUMN: usize = 40;

/// One plate in a rendered report.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// 1-based plate number.
    pub index: usize,
    pub jobs: Vec<String>,
    pub total_volume: f64,
    pub print_time: f64,
}

/// A completed planning run, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub plan_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub constraints: PlateConstraints,
    pub order: Vec<String>,
    pub total_time: f64,
    pub batches: Vec<BatchReport>,
}

impl PlanReport {
    pub fn new(plan_id: Uuid, constraints: PlateConstraints, plan: &PrintPlan) -> Self {
        let batches = plan
            .batches
            .iter()
            .enumerate()
            .map(|(i, b)| BatchReport {
                index: i + 1,
                jobs: b.ids().map(str::to_string).collect(),
                total_volume: b.total_volume,
                print_time: b.print_time,
            })
            .collect();

        Self {
            plan_id,
            generated_at: Utc::now(),
            constraints,
            order: plan.order(),
            total_time: plan.total_time(),
            batches,
        }
    }
}

/// Render a report as a plate table followed by the order and total time.
pub fn render_table(report: &PlanReport) -> String {
    let mut out = String::new();

    if report.batches.is_empty() {
        out.push_str("No jobs to print.\n");
    } else {
        let _ = writeln!(
            out,
            "{:<6} {:<width$} {:>10} {:>11}",
            "PLATE",
            "JOBS",
            "VOLUME",
            "TIME (min)",
            width = JOBS_COLUMN
        );
        let rule = "-".repeat(6 + 1 + JOBS_COLUMN + 1 + 10 + 1 + 11);
        let _ = writeln!(out, "{}", rule);
        for b in &report.batches {
            let jobs = b.jobs.join(", ");
            let _ = writeln!(
                out,
                "{:<6} {:<width$} {:>10.1} {:>11}",
                b.index,
                truncate(&jobs, JOBS_COLUMN),
                b.total_volume,
                b.print_time,
                width = JOBS_COLUMN
            );
        }
        let _ = writeln!(out, "{}", rule);
    }

    let _ = writeln!(out, "Print order: [{}]", report.order.join(", "));
    let _ = writeln!(out, "Total time: {} minutes", report.total_time);
    out
}

/// Render a report as pretty-printed JSON.
pub fn render_json(report: &PlanReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
