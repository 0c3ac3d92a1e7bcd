//! Fuzz target for first-fit plate packing.
//!
//! Any structured backlog must either plan every job within the plate limits
//! or fail with an unschedulable job.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use printq_core::scheduler::{BatchPlanner, PlateConstraints, PrintJob};

#[derive(Debug, Arbitrary)]
struct Job {
    volume: u16,
    priority: i8,
    print_time: u16,
}

#[derive(Debug, Arbitrary)]
struct Input {
    max_volume: u16,
    max_items: u8,
    jobs: Vec<Job>,
}

fuzz_target!(|input: Input| {
    let constraints = PlateConstraints {
        max_volume: input.max_volume as f64,
        max_items: input.max_items as usize,
    };
    let jobs: Vec<PrintJob> = input
        .jobs
        .iter()
        .enumerate()
        .map(|(i, j)| {
            PrintJob::new(
                i.to_string(),
                j.volume as f64,
                j.priority as i32,
                j.print_time as f64,
            )
        })
        .collect();
    let count = jobs.len();

    if let Ok(plan) = BatchPlanner::new(constraints).create_batches(jobs) {
        assert_eq!(plan.job_count(), count);
        for batch in &plan.batches {
            assert!(!batch.is_empty());
            assert!(batch.len() <= constraints.max_items);
            assert!(batch.total_volume <= constraints.max_volume);
        }
    }
});
