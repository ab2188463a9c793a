//! Observability: metrics for the HTTP surface. Logging setup lives in `crate::logging`.

pub mod metrics;

pub use self::metrics::{init, record_operation, render, MetricName, Outcome};
