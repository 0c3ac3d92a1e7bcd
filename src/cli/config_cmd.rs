// Copyright 2024-2026 printq Contributors
// SPDX-License-Identifier: Apache-2.0

//! Config CLI subcommands: show, defaults, validate.
//!
//! These commands read configuration from the environment and an optional
//! TOML file; nothing is planned.

use crate::config::{
    EffectiveConfig, EnvConfig, DEFAULT_LOG_LEVEL, DEFAULT_MAX_ITEMS, DEFAULT_MAX_VOLUME,
};
use crate::telemetry::LogFormat;

use super::{EXIT_INPUT_ERROR, EXIT_OK};

/// Print effective config as key-value pairs to stdout.
pub fn run_show(config: &EnvConfig) {
    print_config(&config.effective_config());
}

/// Print default config values (no env or file overrides) to stdout.
pub fn run_defaults() {
    println!("PRINTQ_MAX_VOLUME={}", DEFAULT_MAX_VOLUME);
    println!("PRINTQ_MAX_ITEMS={}", DEFAULT_MAX_ITEMS);
    println!("PRINTQ_LOG_LEVEL={}", DEFAULT_LOG_LEVEL);
    println!("PRINTQ_LOG_FORMAT={}", LogFormat::default().as_str());
    println!("PRINTQ_LOG_FILE=");
    println!("PRINTQ_CONFIG=");
}

/// Validate configuration.
///
/// Returns 0 if valid, 2 if the plate limits or log filter are unusable.
pub fn run_validate(config: &EnvConfig) -> i32 {
    let problems = validation_problems(config);
    if problems.is_empty() {
        println!("Configuration is valid.");
        EXIT_OK
    } else {
        for p in &problems {
            eprintln!("ERROR: {}", p);
        }
        EXIT_INPUT_ERROR
    }
}

/// Collect every configuration problem.
pub fn validation_problems(config: &EnvConfig) -> Vec<String> {
    let mut problems = Vec::new();

    if let Err(e) = config.constraints() {
        problems.push(e.to_string());
    }
    if let Err(e) = tracing_subscriber::EnvFilter::try_new(&config.log.level) {
        problems.push(format!("PRINTQ_LOG_LEVEL '{}': {}", config.log.level, e));
    }

    problems
}

fn print_config(cfg: &EffectiveConfig) {
    println!("PRINTQ_MAX_VOLUME={}", cfg.max_volume);
    println!("PRINTQ_MAX_ITEMS={}", cfg.max_items);
    println!("PRINTQ_LOG_LEVEL={}", cfg.log_level);
    println!("PRINTQ_LOG_FORMAT={}", cfg.log_format);
    println!(
        "PRINTQ_LOG_FILE={}",
        cfg.log_file.as_ref().map(|p| p.display().to_string()).unwrap_or_default()
    );
    println!(
        "PRINTQ_CONFIG={}",
        cfg.config_file.as_ref().map(|p| p.display().to_string()).unwrap_or_default()
    );
}
