//! Observability: evaluation telemetry events and sink abstractions.
//!
//! Evaluation logic never talks to a concrete sink directly.
//! All instrumentation flows through `MetricsEvent` and `MetricsSink`.

pub(crate) mod sink;

// re-exports
pub use sink::{CountingSink, MetricsEvent, MetricsSink, MetricsSnapshot, with_metrics_sink};
