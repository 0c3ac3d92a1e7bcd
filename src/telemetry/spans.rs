//! Span utilities and extension traits for plan tracing.

use tracing::{info_span, Span};

/// Extension trait for adding context to spans.
pub trait SpanExt {
    /// Record the result of an operation into the span.
    fn record_result<T, E>(&self, result: &Result<T, E>)
    where
        E: std::fmt::Display;
}

impl SpanExt for Span {
    fn record_result<T, E>(&self, result: &Result<T, E>)
    where
        E: std::fmt::Display,
    {
        match result {
            Ok(_) => {
                self.record("status", "ok");
            }
            Err(e) => {
                self.record("status", "error");
                self.record("error.message", e.to_string().as_str());
            }
        }
    }
}

/// Factory for standardized planning spans.
pub struct PlanSpan;

impl PlanSpan {
    /// Create a new plan span.
    ///
    /// Fields included:
    /// - `plan_id`: Unique identifier for the planning run
    /// - `jobs`: Backlog size
    /// - `status`: To be filled in by `SpanExt::record_result`
    /// - `error.message`: To be filled in on error
    /// - `batches`, `total_time`: To be filled in on success
    pub fn new(plan_id: &str, jobs: usize) -> Span {
        info_span!(
            "print_plan",
            plan_id = %plan_id,
            jobs = jobs,
            status = tracing::field::Empty,
            error.message = tracing::field::Empty,
            batches = tracing::field::Empty,
            total_time = tracing::field::Empty,
        )
    }
}
