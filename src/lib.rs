//! printq core
//!
//! Plans a 3D print backlog onto sequential build plates.
//!
//! Jobs are ordered by priority (1 is most urgent), then by print time, then
//! by submission order. Each plate is filled first-fit from the ordered
//! backlog under two inclusive limits: total volume and job count. Jobs on a
//! plate print together, so a plate takes as long as its slowest job; plates
//! print one after another.
//!
//! ```
//! use printq_core::scheduler::{schedule, PlateConstraints, PrintJob};
//!
//! let jobs = vec![
//!     PrintJob::new("M1", 100.0, 1, 120.0),
//!     PrintJob::new("M2", 150.0, 1, 90.0),
//!     PrintJob::new("M3", 120.0, 1, 150.0),
//! ];
//! let result = schedule(jobs, &PlateConstraints::default()).unwrap();
//! assert_eq!(result.order, vec!["M2", "M1", "M3"]);
//! assert_eq!(result.total_time, 270.0);
//! ```
//!
//! The planner is a greedy heuristic. It does not minimise plate count or
//! total time.

pub mod cli;
pub mod config;
pub mod input;
pub mod scheduler;
pub mod telemetry;

pub use scheduler::{schedule, PlateConstraints, PrintJob, ScheduleError, ScheduleResult};
