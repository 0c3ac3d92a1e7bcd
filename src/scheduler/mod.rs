//! Plate scheduling module.
//!
//! Orders a print backlog by priority and print time, then packs it onto
//! sequential build plates under volume and item-count limits.

mod batch;
mod error;
mod job;
mod priority;

pub use batch::{schedule, BatchPlanner, PrintBatch, PrintPlan, ScheduleResult};
pub use error::ScheduleError;
pub use job::{PlateConstraints, PrintJob};
pub use priority::{sort_backlog, SequencedJob};
