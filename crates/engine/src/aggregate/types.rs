//! Aggregate metric types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a metric value should be rendered in the summary grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Monetary amount (`R$ 1.234,56`).
    Currency,
    /// Whole-number quantity.
    Count,
    /// Derived ratio, two fraction digits, no symbol.
    Ratio,
}

/// One labelled summary value for the metric grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetric {
    /// Display label, e.g. `Custo Total`.
    pub label: String,
    /// Unrounded value; rounding happens at the formatting boundary.
    pub value: Decimal,
    /// Rendering kind.
    pub kind: MetricKind,
}

impl AggregateMetric {
    /// Creates a metric.
    #[must_use]
    pub fn new(label: impl Into<String>, value: Decimal, kind: MetricKind) -> Self {
        Self {
            label: label.into(),
            value,
            kind,
        }
    }
}
