//! Backlog prioritization.

use std::cmp::Ordering;

use super::job::PrintJob;

/// Job tagged with its position in the submitted backlog.
#[derive(Debug)]
pub struct SequencedJob {
    pub sequence: usize,
    pub job: PrintJob,
}

impl PartialEq for SequencedJob {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SequencedJob {}

impl PartialOrd for SequencedJob {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SequencedJob {
    fn cmp(&self, other: &Self) -> Ordering {
        self.job
            .priority
            .cmp(&other.job.priority)
            .then(self.job.print_time.total_cmp(&other.job.print_time))
            .then(self.sequence.cmp(&other.sequence)) // Lower sequence = submitted earlier
    }
}

/// Sort a backlog into planning order.
///
/// Priority ascending, then print time ascending. Jobs equal on both keys
/// keep their submission order.
pub fn sort_backlog(jobs: Vec<PrintJob>) -> Vec<PrintJob> {
    let mut backlog: Vec<SequencedJob> = jobs
        .into_iter()
        .enumerate()
        .map(|(sequence, job)| SequencedJob { sequence, job })
        .collect();
    backlog.sort_unstable();
    backlog.into_iter().map(|s| s.job).collect()
}
