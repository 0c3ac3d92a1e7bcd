// Copyright 2024-2026 printq Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI module for printq commands.
//!
//! ## Usage
//!
//! ```bash
//! printq-cli plan --jobs queue.json   # Plan a backlog, print a plate table
//! printq-cli demo                     # Plan the built-in reference backlogs
//! printq-cli config show              # Show effective configuration
//! ```

pub mod config_cmd;
pub mod demo_cmd;
pub mod plan_cmd;
pub mod report;

pub use demo_cmd::{run_demo, scenarios, DemoScenario};
pub use plan_cmd::{execute, run_plan, PlanArgs};
pub use report::{render_json, render_table, BatchReport, PlanReport};

use crate::telemetry::{init_logging, LogConfig, LogError};

/// Success.
pub const EXIT_OK: i32 = 0;
/// The backlog holds a job that fits no plate.
pub const EXIT_UNSCHEDULABLE: i32 = 1;
/// Unreadable, malformed or invalid input or configuration.
pub const EXIT_INPUT_ERROR: i32 = 2;

/// Install the log subscriber for a CLI run.
///
/// Logging problems never abort a command; they are reported on stderr.
pub fn init_cli_logging(config: &LogConfig) {
    match init_logging(config) {
        Ok(()) | Err(LogError::AlreadyInitialized) => {}
        Err(e) => eprintln!("WARNING: logging disabled: {}", e),
    }
}
