//! Planner configuration loading from environment variables and TOML.
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! `PRINTQ_*` environment variables. Unparseable environment values fall back
//! without crashing. Plate limits are never clamped: out-of-range limits are
//! reported by [`EnvConfig::constraints`].
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `PRINTQ_MAX_VOLUME` | 300 | Plate volume limit |
//! | `PRINTQ_MAX_ITEMS` | 2 | Jobs per plate limit |
//! | `PRINTQ_LOG_LEVEL` | warn | Tracing filter directive |
//! | `PRINTQ_LOG_FORMAT` | pretty | `pretty` or `json` |
//! | `PRINTQ_LOG_FILE` | (stderr) | Log file path |
//! | `PRINTQ_CONFIG` | (none) | TOML config file path |
//!
//! # Config File
//!
//! ```toml
//! [printer]
//! max_volume = 300.0
//! max_items = 2
//!
//! [logging]
//! level = "info"
//! format = "json"
//! file = "/var/log/printq.log"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::input::{validate_constraints, ConstraintsRecord, InputError};
use crate::scheduler::PlateConstraints;
use crate::telemetry::{LogConfig, LogFormat};

pub const DEFAULT_MAX_VOLUME: f64 = 300.0;
pub const DEFAULT_MAX_ITEMS: i64 = 2;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Errors raised while reading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Invalid config file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
}

/// `[printer]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrinterSection {
    pub max_volume: Option<f64>,
    pub max_items: Option<i64>,
}

/// `[logging]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub format: Option<String>,
    pub file: Option<PathBuf>,
}

/// Contents of a TOML config file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub printer: PrinterSection,
    pub logging: LoggingSection,
}

/// Effective configuration summary, as shown by `config show`.
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    pub max_volume: f64,
    pub max_items: i64,
    pub log_level: String,
    pub log_format: &'static str,
    pub log_file: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
}

/// All planner configuration.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Raw plate volume limit; validated by [`EnvConfig::constraints`].
    pub max_volume: f64,
    /// Raw items-per-plate limit; validated by [`EnvConfig::constraints`].
    pub max_items: i64,
    pub log: LogConfig,
    /// File the values were layered from, if any.
    pub config_file: Option<PathBuf>,
}

/// Parse an `f64` env var, returning `default` on missing or invalid.
fn parse_f64(key: &str, default: f64) -> f64 {
    match std::env::var(key) {
        Ok(val) => val.trim().parse::<f64>().unwrap_or(default),
        Err(_) => default,
    }
}

/// Parse an `i64` env var, returning `default` on missing or invalid.
fn parse_i64(key: &str, default: i64) -> i64 {
    match std::env::var(key) {
        Ok(val) => val.trim().parse::<i64>().unwrap_or(default),
        Err(_) => default,
    }
}

/// Parse a log format env var, returning `default` on missing or invalid.
fn parse_format(key: &str, default: LogFormat) -> LogFormat {
    match std::env::var(key) {
        Ok(val) => val.parse::<LogFormat>().unwrap_or(default),
        Err(_) => default,
    }
}

/// Read a non-empty string env var.
fn parse_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Read and parse a TOML config file.
pub fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn layer(file: FileConfig, config_file: Option<PathBuf>) -> Result<EnvConfig, ConfigError> {
    let file_format = match &file.logging.format {
        Some(raw) => raw.parse::<LogFormat>().map_err(|e| ConfigError::Parse {
            path: config_file.clone().unwrap_or_default(),
            reason: e.to_string(),
        })?,
        None => LogFormat::default(),
    };

    let max_volume = parse_f64(
        "PRINTQ_MAX_VOLUME",
        file.printer.max_volume.unwrap_or(DEFAULT_MAX_VOLUME),
    );
    let max_items = parse_i64(
        "PRINTQ_MAX_ITEMS",
        file.printer.max_items.unwrap_or(DEFAULT_MAX_ITEMS),
    );
    let level = parse_string("PRINTQ_LOG_LEVEL")
        .or(file.logging.level)
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let format = parse_format("PRINTQ_LOG_FORMAT", file_format);
    let output_path = parse_string("PRINTQ_LOG_FILE")
        .map(PathBuf::from)
        .or(file.logging.file);

    Ok(EnvConfig {
        max_volume,
        max_items,
        log: LogConfig {
            format,
            level,
            output_path,
        },
        config_file,
    })
}

/// Load configuration from environment variables only.
///
/// Missing or invalid values fall back to defaults without panicking.
/// `PRINTQ_CONFIG` is not consulted; use [`load_with_file`] for that.
pub fn load() -> EnvConfig {
    EnvConfig {
        max_volume: parse_f64("PRINTQ_MAX_VOLUME", DEFAULT_MAX_VOLUME),
        max_items: parse_i64("PRINTQ_MAX_ITEMS", DEFAULT_MAX_ITEMS),
        log: LogConfig {
            format: parse_format("PRINTQ_LOG_FORMAT", LogFormat::default()),
            level: parse_string("PRINTQ_LOG_LEVEL")
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            output_path: parse_string("PRINTQ_LOG_FILE").map(PathBuf::from),
        },
        config_file: None,
    }
}

/// Load configuration layered over a TOML file.
///
/// `path` wins over `PRINTQ_CONFIG`. Without either, this is [`load`].
pub fn load_with_file(path: Option<&Path>) -> Result<EnvConfig, ConfigError> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(|| parse_string("PRINTQ_CONFIG").map(PathBuf::from));

    match path {
        Some(path) => {
            let file = read_file_config(&path)?;
            layer(file, Some(path))
        }
        None => Ok(load()),
    }
}

impl EnvConfig {
    /// Validated plate limits.
    pub fn constraints(&self) -> Result<PlateConstraints, InputError> {
        validate_constraints(self.max_volume, self.max_items)
    }

    /// Plate limits as an unvalidated record.
    pub fn constraints_record(&self) -> ConstraintsRecord {
        ConstraintsRecord {
            max_volume: self.max_volume,
            max_items: self.max_items,
        }
    }

    /// Return a summary of all effective values.
    pub fn effective_config(&self) -> EffectiveConfig {
        EffectiveConfig {
            max_volume: self.max_volume,
            max_items: self.max_items,
            log_level: self.log.level.clone(),
            log_format: self.log.format.as_str(),
            log_file: self.log.output_path.clone(),
            config_file: self.config_file.clone(),
        }
    }
}
