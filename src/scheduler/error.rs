//! Scheduling error types.
//!
//! Planning fails closed: a backlog that cannot be fully placed yields no
//! partial plan.

use thiserror::Error;

/// Errors that can occur while forming plate batches.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error(
        "Unschedulable job {id}: volume {volume} does not fit an empty plate \
         (max volume {max_volume}, max items {max_items}); {remaining} job(s) left unplanned"
    )]
    Unschedulable {
        id: String,
        volume: f64,
        max_volume: f64,
        max_items: usize,
        remaining: usize,
    },
}

impl ScheduleError {
    /// Id of the job that blocked planning.
    pub fn job_id(&self) -> &str {
        match self {
            Self::Unschedulable { id, .. } => id,
        }
    }
}
