//! Prometheus metrics for the calculator service
//!
//! Counters go through the `metrics` facade; the Prometheus recorder is
//! installed once per process and its handle renders the `/metrics` page.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::fmt;
use std::sync::OnceLock;
use tracing::info;

use crate::calculator::{Operation, OperationError};
use crate::error::{CalcError, Result};

/// All metric names used by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    OperationsTotal,
    HealthChecksTotal,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::OperationsTotal => "calc_operations_total",
            MetricName::HealthChecksTotal => "calc_health_checks_total",
        }
    }

    pub fn all_metrics() -> impl Iterator<Item = MetricName> {
        [MetricName::OperationsTotal, MetricName::HealthChecksTotal].into_iter()
    }

    fn description(&self) -> &'static str {
        match self {
            MetricName::OperationsTotal => "Calculator operations by operation and outcome",
            MetricName::HealthChecksTotal => "Health check requests served",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome label attached to every operation counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    InvalidOperand,
    DivisionByZero,
    OutOfRange,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::InvalidOperand => "invalid_operand",
            Outcome::DivisionByZero => "division_by_zero",
            Outcome::OutOfRange => "out_of_range",
        }
    }
}

impl From<&OperationError> for Outcome {
    fn from(err: &OperationError) -> Self {
        match err {
            OperationError::InvalidOperand => Outcome::InvalidOperand,
            OperationError::DivisionByZero => Outcome::DivisionByZero,
        }
    }
}

static HANDLE: OnceLock<std::result::Result<PrometheusHandle, String>> = OnceLock::new();

/// Install the Prometheus recorder. Idempotent: later calls return the result
/// of the first one.
pub fn init() -> Result<()> {
    let installed = HANDLE.get_or_init(|| {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| format!("Failed to install Prometheus recorder: {}", e))?;
        for name in MetricName::all_metrics() {
            ::metrics::describe_counter!(name.as_str(), name.description());
        }
        info!("Metrics system initialized");
        Ok(handle)
    });
    installed
        .as_ref()
        .map(|_| ())
        .map_err(|e| CalcError::Metrics(e.clone()))
}

/// Render the current metrics in Prometheus text format, if the recorder is installed
pub fn render() -> Option<String> {
    HANDLE
        .get()
        .and_then(|installed| installed.as_ref().ok())
        .map(|handle| handle.render())
}

pub fn record_operation(op: Operation, outcome: Outcome) {
    ::metrics::counter!(
        MetricName::OperationsTotal.as_str(),
        "operation" => op.as_str(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
}

pub fn health_checked() {
    ::metrics::counter!(MetricName::HealthChecksTotal.as_str()).increment(1);
}
