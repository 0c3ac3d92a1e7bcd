//! Plan request decoding and validation.
//!
//! Raw job and plate records are checked before they reach the planner.
//! Invalid records are rejected, not repaired.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scheduler::{PlateConstraints, PrintJob};

/// Maximum encoded plan request size in bytes (4 MiB).
pub const MAX_REQUEST_BYTES: usize = 4 * 1024 * 1024;

/// Maximum number of jobs in one plan request.
pub const MAX_JOBS: usize = 10_000;

/// Errors raised while building planner input from raw records.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Malformed plan request: {0}")]
    Malformed(String),

    #[error("Plan request too large: {size} > {max} bytes")]
    TooLarge { size: usize, max: usize },

    #[error("Too many jobs: {count} > {max}")]
    TooManyJobs { count: usize, max: usize },

    #[error("Invalid job at index {index}: {reason}")]
    InvalidJob { index: usize, reason: String },

    #[error("Duplicate job id: {0}")]
    DuplicateId(String),

    #[error("Invalid constraints: {0}")]
    InvalidConstraints(String),
}

/// Unvalidated job record as submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    pub volume: f64,
    pub priority: i32,
    pub print_time: f64,
}

/// Unvalidated plate limits as submitted.
///
/// `max_items` is signed so that negative values are reported as invalid
/// constraints rather than as a decoding failure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConstraintsRecord {
    pub max_volume: f64,
    pub max_items: i64,
}

/// A backlog plus optional plate limits, as read from a JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    #[serde(default)]
    pub constraints: Option<ConstraintsRecord>,
    pub jobs: Vec<JobRecord>,
}

impl PlanRequest {
    /// Validate the request.
    ///
    /// Request constraints take precedence over `fallback`; whichever is used
    /// is validated.
    pub fn into_parts(
        self,
        fallback: ConstraintsRecord,
    ) -> Result<(Vec<PrintJob>, PlateConstraints), InputError> {
        let record = self.constraints.unwrap_or(fallback);
        let constraints = PlateConstraints::try_from(record)?;
        let jobs = validate_jobs(self.jobs)?;
        Ok((jobs, constraints))
    }
}

/// Decode a JSON plan request.
pub fn decode_request(data: &[u8]) -> Result<PlanRequest, InputError> {
    if data.len() > MAX_REQUEST_BYTES {
        return Err(InputError::TooLarge {
            size: data.len(),
            max: MAX_REQUEST_BYTES,
        });
    }
    let request: PlanRequest =
        serde_json::from_slice(data).map_err(|e| InputError::Malformed(e.to_string()))?;
    if request.jobs.len() > MAX_JOBS {
        return Err(InputError::TooManyJobs {
            count: request.jobs.len(),
            max: MAX_JOBS,
        });
    }
    Ok(request)
}

/// Validate a single job record.
pub fn validate_job(index: usize, record: JobRecord) -> Result<PrintJob, InputError> {
    let invalid = |reason: String| InputError::InvalidJob { index, reason };

    if record.id.trim().is_empty() {
        return Err(invalid("id cannot be empty".into()));
    }
    if !record.volume.is_finite() {
        return Err(invalid(format!("volume must be finite, got {}", record.volume)));
    }
    if record.volume < 0.0 {
        return Err(invalid(format!("volume cannot be negative, got {}", record.volume)));
    }
    if !record.print_time.is_finite() {
        return Err(invalid(format!(
            "print_time must be finite, got {}",
            record.print_time
        )));
    }
    if record.print_time < 0.0 {
        return Err(invalid(format!(
            "print_time cannot be negative, got {}",
            record.print_time
        )));
    }

    Ok(PrintJob {
        id: record.id,
        volume: record.volume,
        priority: record.priority,
        print_time: record.print_time,
    })
}

/// Validate a backlog, rejecting the first bad record or repeated id.
pub fn validate_jobs(records: Vec<JobRecord>) -> Result<Vec<PrintJob>, InputError> {
    if records.len() > MAX_JOBS {
        return Err(InputError::TooManyJobs {
            count: records.len(),
            max: MAX_JOBS,
        });
    }

    let mut seen = HashSet::with_capacity(records.len());
    let mut jobs = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let job = validate_job(index, record)?;
        if !seen.insert(job.id.clone()) {
            return Err(InputError::DuplicateId(job.id));
        }
        jobs.push(job);
    }
    Ok(jobs)
}

/// Build plate constraints from raw limits.
pub fn validate_constraints(max_volume: f64, max_items: i64) -> Result<PlateConstraints, InputError> {
    if !max_volume.is_finite() || max_volume < 0.0 {
        return Err(InputError::InvalidConstraints(format!(
            "max_volume must be a finite non-negative number, got {}",
            max_volume
        )));
    }
    if max_items < 1 {
        return Err(InputError::InvalidConstraints(format!(
            "max_items must be at least 1, got {}",
            max_items
        )));
    }
    let max_items = usize::try_from(max_items).map_err(|_| {
        InputError::InvalidConstraints(format!("max_items out of range: {}", max_items))
    })?;
    Ok(PlateConstraints {
        max_volume,
        max_items,
    })
}

impl TryFrom<ConstraintsRecord> for PlateConstraints {
    type Error = InputError;

    fn try_from(record: ConstraintsRecord) -> Result<Self, Self::Error> {
        validate_constraints(record.max_volume, record.max_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, volume: f64) -> JobRecord {
        JobRecord {
            id: id.to_string(),
            volume,
            priority: 1,
            print_time: 60.0,
        }
    }

    #[test]
    fn zero_volume_job_is_valid() {
        let job = validate_job(0, record("a", 0.0)).unwrap();
        assert_eq!(job.volume, 0.0);
    }

    #[test]
    fn blank_id_is_rejected() {
        let err = validate_job(3, record("  ", 1.0)).unwrap_err();
        assert!(matches!(err, InputError::InvalidJob { index: 3, .. }));
    }

    #[test]
    fn nan_volume_is_rejected() {
        assert!(validate_job(0, record("a", f64::NAN)).is_err());
        assert!(validate_job(0, record("a", f64::INFINITY)).is_err());
    }

    #[test]
    fn bad_print_time_is_rejected() {
        let mut r = record("a", 1.0);
        r.print_time = -1.0;
        assert!(validate_job(0, r.clone()).is_err());
        r.print_time = f64::NAN;
        assert!(validate_job(0, r).is_err());
    }

    #[test]
    fn zero_volume_plate_is_valid() {
        let c = validate_constraints(0.0, 1).unwrap();
        assert_eq!(c.max_volume, 0.0);
        assert_eq!(c.max_items, 1);
    }

    #[test]
    fn oversized_request_is_rejected_before_parsing() {
        let data = vec![b' '; MAX_REQUEST_BYTES + 1];
        assert!(matches!(
            decode_request(&data),
            Err(InputError::TooLarge { .. })
        ));
    }
}
