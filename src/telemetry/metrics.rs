//! Metrics facade helpers.
//!
//! Emits through the `metrics` crate; with no recorder installed these are
//! no-ops.

use metrics::{counter, histogram};

use crate::scheduler::PrintPlan;

/// Record a successful planning run.
pub fn record_plan_success(plan: &PrintPlan) {
    counter!("printq_plans_total").increment(1);
    histogram!("printq_batches_per_plan").record(plan.batches.len() as f64);
    histogram!("printq_plan_total_time").record(plan.total_time());
}

/// Record a planning run that could not place every job.
pub fn record_plan_failure() {
    counter!("printq_plans_total").increment(1);
    counter!("printq_plans_failed_total").increment(1);
}
