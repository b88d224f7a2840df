//! Metrics for completion calls.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;

static METRICS: OnceLock<CompletionMetrics> = OnceLock::new();

/// OpenTelemetry instruments for completion calls.
///
/// Labeled with provider and model; errors also carry the error class.
#[derive(Clone)]
pub struct CompletionMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Successful completion calls
    pub requests: Counter<u64>,
    /// Failed completion calls
    pub errors: Counter<u64>,
    /// Retries after transient failures
    pub retries: Counter<u64>,
    /// Completion call duration in seconds, retries included
    pub duration: Histogram<f64>,
}

impl CompletionMetrics {
    fn init() -> Self {
        let meter = global::meter("fabula_llm");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("llm.requests")
                .with_description("Successful completion calls")
                .build(),
            errors: meter
                .u64_counter("llm.errors")
                .with_description("Failed completion calls")
                .build(),
            retries: meter
                .u64_counter("llm.retries")
                .with_description("Retries after transient failures")
                .build(),
            duration: meter
                .f64_histogram("llm.duration")
                .with_unit("seconds")
                .with_description("Completion call duration")
                .build(),
        }
    }

    /// Get the global completion metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a successful completion call.
    pub fn record_request(&self, provider: &str, model: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed completion call.
    pub fn record_error(&self, provider: &str, model: &str, error_type: &str) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("error_type", error_type.to_string()),
        ];
        self.errors.add(1, labels);
    }

    /// Record a retry after a transient failure.
    pub fn record_retry(&self, provider: &str, error_type: &str) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("error_type", error_type.to_string()),
        ];
        self.retries.add(1, labels);
    }
}

impl Default for CompletionMetrics {
    fn default() -> Self {
        Self::get().clone()
    }
}
