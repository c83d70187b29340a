//! The aggregate computer service.

use rust_decimal::Decimal;
use tracing::debug;

use florestal_shared::Record;

use super::types::{AggregateMetric, MetricKind};
use crate::dataset::FilteredDataset;

/// Bucket label for records whose grouping field is absent.
pub const UNCATEGORIZED_LABEL: &str = "Sem categoria";

/// Decimal arithmetic over filtered datasets.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateComputer;

impl AggregateComputer {
    /// Sums a field across the dataset.
    ///
    /// Each value is coerced to a decimal; invalid or absent values count
    /// as zero. Decimal arithmetic, so the result is never NaN.
    #[must_use]
    pub fn sum(dataset: &FilteredDataset<'_>, field: &str) -> Decimal {
        dataset
            .iter()
            .filter_map(|record| record.get(field).coerce_decimal())
            .sum()
    }

    /// Divides `total` by a field of the reference record.
    ///
    /// Returns zero whenever the reference is missing or the denominator
    /// is zero, absent, or non-numeric.
    #[must_use]
    pub fn ratio(total: Decimal, reference: Option<&Record>, field: &str) -> Decimal {
        let denominator = reference
            .and_then(|record| record.get(field).coerce_decimal())
            .unwrap_or(Decimal::ZERO);
        if denominator.is_zero() {
            return Decimal::ZERO;
        }
        total.checked_div(denominator).unwrap_or(Decimal::ZERO)
    }

    /// Totals `value_field` per distinct raw value of `group_by`.
    ///
    /// Groups appear in first-seen dataset order; records with an absent
    /// grouping field land in the fixed `Sem categoria` bucket. The result
    /// is a partition: group totals sum to `sum(dataset, value_field)`.
    #[must_use]
    pub fn group_totals(
        dataset: &FilteredDataset<'_>,
        group_by: &str,
        value_field: &str,
    ) -> Vec<(String, Decimal)> {
        let mut groups: Vec<(String, Decimal)> = Vec::new();
        for record in dataset.iter() {
            let key = match record.get(group_by).as_text() {
                Some(text) if !text.trim().is_empty() => text.trim().to_string(),
                _ => UNCATEGORIZED_LABEL.to_string(),
            };
            let amount = record.get(value_field).coerce_decimal().unwrap_or(Decimal::ZERO);
            match groups.iter_mut().find(|(label, _)| *label == key) {
                Some((_, total)) => *total += amount,
                None => groups.push((key, amount)),
            }
        }
        debug!(group_by, groups = groups.len(), "group totals computed");
        groups
    }

    /// Share of `part` in `whole`, as a 0-100 percentage.
    ///
    /// Zero when the whole is zero. Unrounded; callers round to two
    /// fraction digits at the formatting boundary.
    #[must_use]
    pub fn percentage_of_whole(part: Decimal, whole: Decimal) -> Decimal {
        if whole.is_zero() {
            return Decimal::ZERO;
        }
        part.checked_div(whole).unwrap_or(Decimal::ZERO) * Decimal::ONE_HUNDRED
    }

    /// The expense summary metrics: total cost plus the three derived
    /// ratios, with denominators taken from the reference property record.
    #[must_use]
    pub fn expense_metrics(
        dataset: &FilteredDataset<'_>,
        reference: Option<&Record>,
    ) -> Vec<AggregateMetric> {
        let total = Self::sum(dataset, "total");
        vec![
            AggregateMetric::new("Custo Total", total, MetricKind::Currency),
            AggregateMetric::new(
                "Custo por Árvore Remanescente",
                Self::ratio(total, reference, "num_arvores_remanescentes"),
                MetricKind::Ratio,
            ),
            AggregateMetric::new(
                "Despesa por Hectare",
                Self::ratio(total, reference, "area_plantio"),
                MetricKind::Ratio,
            ),
            AggregateMetric::new(
                "Custo por Muda",
                Self::ratio(total, reference, "num_arvores_plantadas"),
                MetricKind::Ratio,
            ),
        ]
    }
}
