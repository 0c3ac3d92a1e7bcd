//! Print job and build plate types.

use serde::{Deserialize, Serialize};

/// A single model waiting to be printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintJob {
    /// Opaque identifier, only used for reporting.
    pub id: String,
    /// Volume consumed from the plate budget.
    pub volume: f64,
    /// Rank, lower is more urgent (1 is highest).
    pub priority: i32,
    /// Print time in minutes.
    pub print_time: f64,
}

impl PrintJob {
    pub fn new(id: impl Into<String>, volume: f64, priority: i32, print_time: f64) -> Self {
        Self {
            id: id.into(),
            volume,
            priority,
            print_time,
        }
    }
}

/// Capacity limits of one build plate.
///
/// Both bounds are inclusive. Values are trusted here; range checks happen
/// when constraints are built from raw input (see [`crate::input`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateConstraints {
    pub max_volume: f64,
    pub max_items: usize,
}

impl Default for PlateConstraints {
    fn default() -> Self {
        Self {
            max_volume: 300.0,
            max_items: 2,
        }
    }
}
