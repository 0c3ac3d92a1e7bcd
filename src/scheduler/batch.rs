//! Plate batching logic.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::ScheduleError;
use super::job::{PlateConstraints, PrintJob};
use super::priority::sort_backlog;

/// A group of jobs printed together on one build plate.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PrintBatch {
    /// Jobs in admission order.
    pub jobs: Vec<PrintJob>,
    pub total_volume: f64,
    /// Longest print time among the jobs; the plate finishes with its slowest job.
    pub print_time: f64,
}

impl PrintBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.jobs.iter().map(|j| j.id.as_str())
    }
}

/// Ordered plate batches produced by one planning run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PrintPlan {
    pub batches: Vec<PrintBatch>,
}

impl PrintPlan {
    /// Job ids in print order.
    pub fn order(&self) -> Vec<String> {
        self.batches
            .iter()
            .flat_map(|b| b.ids().map(str::to_string))
            .collect()
    }

    /// Sum of per-batch print times. Batches run back to back.
    pub fn total_time(&self) -> f64 {
        self.batches.iter().map(|b| b.print_time).sum()
    }

    pub fn job_count(&self) -> usize {
        self.batches.iter().map(PrintBatch::len).sum()
    }

    pub fn into_result(self) -> ScheduleResult {
        ScheduleResult {
            order: self.order(),
            total_time: self.total_time(),
        }
    }
}

/// Print order and total elapsed minutes for a backlog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub order: Vec<String>,
    pub total_time: f64,
}

/// Packs a prioritized backlog onto build plates, first-fit.
#[derive(Debug, Clone)]
pub struct BatchPlanner {
    constraints: PlateConstraints,
}

impl BatchPlanner {
    pub fn new(constraints: PlateConstraints) -> Self {
        Self { constraints }
    }

    pub fn constraints(&self) -> &PlateConstraints {
        &self.constraints
    }

    /// Check if a job can be added to the batch.
    pub fn can_add(&self, batch: &PrintBatch, job: &PrintJob) -> bool {
        if batch.len() >= self.constraints.max_items {
            return false;
        }

        let new_total = batch.total_volume + job.volume;
        new_total <= self.constraints.max_volume
    }

    /// Add a job to the batch.
    pub fn add(&self, batch: &mut PrintBatch, job: PrintJob) {
        batch.total_volume += job.volume;
        batch.print_time = batch.print_time.max(job.print_time);
        batch.jobs.push(job);
    }

    /// Create plate batches from a backlog.
    ///
    /// The backlog is sorted once, then each pass scans the remaining jobs in
    /// order and admits every job that still fits the plate being filled.
    /// Rejected jobs are deferred to later passes. A pass that admits nothing
    /// means the head of the remaining backlog can never be placed.
    pub fn create_batches(&self, jobs: Vec<PrintJob>) -> Result<PrintPlan, ScheduleError> {
        let mut backlog = sort_backlog(jobs);
        let mut plan = PrintPlan::default();

        while !backlog.is_empty() {
            let mut batch = PrintBatch::new();
            let mut deferred = Vec::with_capacity(backlog.len());

            for job in backlog {
                if self.can_add(&batch, &job) {
                    self.add(&mut batch, job);
                } else {
                    deferred.push(job);
                }
            }

            if batch.is_empty() {
                if let Some(job) = deferred.first() {
                    warn!(
                        job_id = %job.id,
                        volume = job.volume,
                        max_volume = self.constraints.max_volume,
                        remaining = deferred.len(),
                        "job does not fit an empty plate"
                    );
                    return Err(ScheduleError::Unschedulable {
                        id: job.id.clone(),
                        volume: job.volume,
                        max_volume: self.constraints.max_volume,
                        max_items: self.constraints.max_items,
                        remaining: deferred.len(),
                    });
                }
            }

            debug!(
                batch = plan.batches.len(),
                jobs = batch.len(),
                total_volume = batch.total_volume,
                print_time = batch.print_time,
                deferred = deferred.len(),
                "plate batch formed"
            );
            plan.batches.push(batch);
            backlog = deferred;
        }

        Ok(plan)
    }
}

/// Plan `jobs` under `constraints` and return the print order and total time.
pub fn schedule(
    jobs: Vec<PrintJob>,
    constraints: &PlateConstraints,
) -> Result<ScheduleResult, ScheduleError> {
    BatchPlanner::new(*constraints)
        .create_batches(jobs)
        .map(PrintPlan::into_result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planner(max_volume: f64, max_items: usize) -> BatchPlanner {
        BatchPlanner::new(PlateConstraints { max_volume, max_items })
    }

    #[test]
    fn can_add_accepts_exact_volume_fit() {
        let p = planner(300.0, 3);
        let mut batch = PrintBatch::new();
        p.add(&mut batch, PrintJob::new("a", 200.0, 1, 10.0));
        assert!(p.can_add(&batch, &PrintJob::new("b", 100.0, 1, 10.0)));
        assert!(!p.can_add(&batch, &PrintJob::new("c", 100.5, 1, 10.0)));
    }

    #[test]
    fn can_add_rejects_when_item_limit_reached() {
        let p = planner(1000.0, 1);
        let mut batch = PrintBatch::new();
        p.add(&mut batch, PrintJob::new("a", 1.0, 1, 10.0));
        assert!(!p.can_add(&batch, &PrintJob::new("b", 1.0, 1, 10.0)));
    }

    #[test]
    fn add_tracks_volume_and_longest_print() {
        let p = planner(1000.0, 4);
        let mut batch = PrintBatch::new();
        p.add(&mut batch, PrintJob::new("a", 10.0, 1, 40.0));
        p.add(&mut batch, PrintJob::new("b", 15.0, 1, 90.0));
        p.add(&mut batch, PrintJob::new("c", 5.0, 1, 60.0));
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.total_volume, 30.0);
        assert_eq!(batch.print_time, 90.0);
    }

    #[test]
    fn skipped_job_does_not_block_smaller_followers() {
        let p = planner(100.0, 5);
        let plan = p
            .create_batches(vec![
                PrintJob::new("big", 80.0, 1, 10.0),
                PrintJob::new("too-big", 50.0, 1, 20.0),
                PrintJob::new("small", 20.0, 1, 30.0),
            ])
            .unwrap();
        assert_eq!(plan.batches.len(), 2);
        assert_eq!(plan.batches[0].ids().collect::<Vec<_>>(), vec!["big", "small"]);
        assert_eq!(plan.batches[1].ids().collect::<Vec<_>>(), vec!["too-big"]);
        assert_eq!(plan.total_time(), 30.0 + 20.0);
    }

    #[test]
    fn zero_item_limit_is_reported_not_looped() {
        let p = planner(100.0, 0);
        let err = p
            .create_batches(vec![PrintJob::new("a", 1.0, 1, 1.0)])
            .unwrap_err();
        assert_eq!(err.job_id(), "a");
    }

    #[test]
    fn fractional_print_times_sum_exactly() {
        let p = planner(10.0, 1);
        let plan = p
            .create_batches(vec![
                PrintJob::new("a", 1.0, 1, 90.5),
                PrintJob::new("b", 1.0, 1, 29.5),
            ])
            .unwrap();
        assert_eq!(plan.batches[0].print_time, 29.5);
        assert_eq!(plan.total_time(), 120.0);
    }
}
