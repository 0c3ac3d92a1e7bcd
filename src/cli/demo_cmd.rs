// Copyright 2024-2026 printq Contributors
// SPDX-License-Identifier: Apache-2.0

//! Demo CLI subcommand.
//!
//! Plans three reference backlogs on the default 300-unit, two-item plate.

use super::plan_cmd::execute;
use super::report::{render_json, render_table};
use super::{EXIT_INPUT_ERROR, EXIT_OK, EXIT_UNSCHEDULABLE};
use crate::scheduler::{PlateConstraints, PrintJob};

/// A named reference backlog.
#[derive(Debug, Clone)]
pub struct DemoScenario {
    pub title: &'static str,
    pub jobs: Vec<PrintJob>,
}

/// The reference backlogs, all planned with [`PlateConstraints::default`].
pub fn scenarios() -> Vec<DemoScenario> {
    vec![
        DemoScenario {
            title: "Scenario 1 (equal priority)",
            jobs: vec![
                PrintJob::new("M1", 100.0, 1, 120.0),
                PrintJob::new("M2", 150.0, 1, 90.0),
                PrintJob::new("M3", 120.0, 1, 150.0),
            ],
        },
        DemoScenario {
            title: "Scenario 2 (mixed priorities)",
            jobs: vec![
                PrintJob::new("M1", 100.0, 2, 120.0), // lab assignment
                PrintJob::new("M2", 150.0, 1, 90.0),  // thesis
                PrintJob::new("M3", 120.0, 3, 150.0), // personal project
            ],
        },
        DemoScenario {
            title: "Scenario 3 (plate volume exceeded)",
            jobs: vec![
                PrintJob::new("M1", 250.0, 1, 180.0),
                PrintJob::new("M2", 200.0, 1, 150.0),
                PrintJob::new("M3", 180.0, 2, 120.0),
            ],
        },
    ]
}

/// Run `demo`. Returns the process exit code.
pub fn run_demo(json: bool) -> i32 {
    let mut code = EXIT_OK;

    for (i, scenario) in scenarios().into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}:", scenario.title);
        match execute(scenario.jobs, PlateConstraints::default()) {
            Ok(report) if json => {
                if let Err(c) = print_json(render_json(&report)) {
                    code = c;
                }
            }
            Ok(report) => print!("{}", render_table(&report)),
            Err(e) => {
                eprintln!("Error: {}", e);
                code = EXIT_UNSCHEDULABLE;
            }
        }
    }

    code
}

/// Print an encoded report, or report the encoding failure as an exit code.
fn print_json<E: std::fmt::Display>(rendered: Result<String, E>) -> Result<(), i32> {
    match rendered {
        Ok(out) => {
            println!("{}", out);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error encoding report: {}", e);
            Err(EXIT_INPUT_ERROR)
        }
    }
}
