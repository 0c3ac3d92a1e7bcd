//! printq CLI entry point.
//!
//! ## CLI Subcommands
//!
//! - `printq-cli plan --jobs FILE` - Plan a backlog onto build plates
//! - `printq-cli demo` - Plan the built-in reference backlogs
//! - `printq-cli config show|defaults|validate` - Inspect configuration

use std::path::PathBuf;
use std::process::ExitCode;

use printq_core::cli::config_cmd;
use printq_core::cli::{init_cli_logging, run_demo, run_plan, PlanArgs, EXIT_INPUT_ERROR};
use printq_core::config;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("help");
    let rest = args.get(2..).unwrap_or(&[]);

    match command {
        "plan" => {
            let plan_args = match PlanArgs::parse(rest) {
                Ok(a) => a,
                Err(msg) => {
                    eprintln!("{}", msg);
                    print_command_help("plan");
                    return exit(EXIT_INPUT_ERROR);
                }
            };
            let env = match config::load_with_file(plan_args.config_path.as_deref()) {
                Ok(env) => env,
                Err(e) => {
                    eprintln!("Configuration error: {}", e);
                    return exit(EXIT_INPUT_ERROR);
                }
            };
            init_cli_logging(&env.log);
            exit(run_plan(&plan_args, &env))
        }
        "demo" => {
            let json = rest.iter().any(|a| a == "--json");
            let env = match config::load_with_file(None) {
                Ok(env) => env,
                Err(e) => {
                    eprintln!("Configuration error: {}", e);
                    return exit(EXIT_INPUT_ERROR);
                }
            };
            init_cli_logging(&env.log);
            exit(run_demo(json))
        }
        "config" => {
            let (subcommand, flags) = config_args(rest);
            if subcommand == "defaults" {
                config_cmd::run_defaults();
                return ExitCode::SUCCESS;
            }

            let file = match file_flag(flags) {
                Ok(file) => file,
                Err(msg) => {
                    eprintln!("{}", msg);
                    print_command_help("config");
                    return exit(EXIT_INPUT_ERROR);
                }
            };
            let env = match config::load_with_file(file.as_deref()) {
                Ok(env) => env,
                Err(e) => {
                    eprintln!("Configuration error: {}", e);
                    return exit(EXIT_INPUT_ERROR);
                }
            };
            match subcommand {
                "show" => {
                    config_cmd::run_show(&env);
                    ExitCode::SUCCESS
                }
                "validate" => exit(config_cmd::run_validate(&env)),
                _ => {
                    eprintln!("Unknown config subcommand: {}", subcommand);
                    print_command_help("config");
                    ExitCode::FAILURE
                }
            }
        }
        "help" | "--help" | "-h" => {
            if let Some(subcommand) = rest.first() {
                print_command_help(subcommand);
            } else {
                print_usage();
            }
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("printq {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            exit(EXIT_INPUT_ERROR)
        }
    }
}

fn exit(code: i32) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Split `config` arguments into the subcommand and its flags.
///
/// A missing subcommand, or one that is really a flag, means `show`.
fn config_args(rest: &[String]) -> (&str, &[String]) {
    match rest.split_first() {
        Some((first, flags)) if !first.starts_with("--") => (first.as_str(), flags),
        _ => ("show", rest),
    }
}

/// Parse an optional `--file PATH` pair.
fn file_flag(args: &[String]) -> Result<Option<PathBuf>, String> {
    match args {
        [] => Ok(None),
        [flag, path] if flag == "--file" => Ok(Some(PathBuf::from(path))),
        [flag] if flag == "--file" => Err("Missing value for --file".to_string()),
        [other, ..] => Err(format!("Unknown argument: {}", other)),
    }
}

fn print_usage() {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        "printq - 3D print plate planner v{}

USAGE:
    printq-cli [COMMAND] [OPTIONS]

COMMANDS:
    plan         Plan a job backlog onto build plates
    demo         Plan the built-in reference backlogs
    config       Inspect configuration (show, defaults, validate)
    version      Show version information
    help         Show this help message

EXAMPLES:
    printq-cli plan --jobs queue.json
    printq-cli plan --jobs queue.json --max-volume 250 --max-items 3 --json
    printq-cli demo
    printq-cli config validate --file printq.toml

ENVIRONMENT:
    PRINTQ_MAX_VOLUME   Plate volume limit (default: 300)
    PRINTQ_MAX_ITEMS    Jobs per plate limit (default: 2)
    PRINTQ_LOG_LEVEL    Log filter (default: warn)
    PRINTQ_LOG_FORMAT   pretty or json (default: pretty)
    PRINTQ_LOG_FILE     Log file path (default: stderr)
    PRINTQ_CONFIG       TOML config file

EXIT CODES:
    0  Success
    1  A job fits no plate
    2  Input or configuration error
",
        version
    );
}

/// Print detailed help for a specific command.
fn print_command_help(command: &str) {
    match command {
        "plan" => {
            eprintln!(
                "printq-cli plan - Plan a job backlog

USAGE:
    printq-cli plan --jobs FILE [OPTIONS]

OPTIONS:
    --jobs FILE        JSON plan request (required)
    --max-volume N     Override plate volume limit
    --max-items N      Override jobs per plate limit
    --config FILE      Load configuration from a TOML file
    --json             Print the report as JSON

REQUEST FORMAT:
    {{
      \"constraints\": {{ \"max_volume\": 300, \"max_items\": 2 }},
      \"jobs\": [
        {{ \"id\": \"M1\", \"volume\": 100, \"priority\": 1, \"print_time\": 120 }}
      ]
    }}

    \"constraints\" is optional. Limits are taken from flags first, then
    the request, then configuration.

EXIT CODES:
    0  Plan printed
    1  A job is larger than an empty plate
    2  Unreadable, malformed or invalid request
"
            );
        }
        "demo" => {
            eprintln!(
                "printq-cli demo - Plan the reference backlogs

USAGE:
    printq-cli demo [--json]

DESCRIPTION:
    Plans three small backlogs on a 300-unit, two-job plate: equal
    priorities, mixed priorities, and jobs too large to share a plate.
"
            );
        }
        "config" => {
            eprintln!(
                "printq-cli config - Inspect configuration

USAGE:
    printq-cli config <SUBCOMMAND> [--file PATH]

SUBCOMMANDS:
    show           Show effective configuration
    defaults       Show default configuration
    validate       Check plate limits and log filter
"
            );
        }
        _ => {
            eprintln!(
                "No detailed help available for '{}'. Use 'printq-cli help' for general usage.",
                command
            );
        }
    }
}
