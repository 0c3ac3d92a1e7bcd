//! Telemetry module.
//!
//! Provides structured logging, plan spans, and metrics emission.

mod logging;
mod metrics;
mod spans;

pub use logging::{init_logging, LogConfig, LogError, LogFormat};
pub use self::metrics::{record_plan_failure, record_plan_success};
pub use spans::{PlanSpan, SpanExt};
