//! The dataset filter service.

use std::cmp::Ordering;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use florestal_shared::Record;

use super::types::FilteredDataset;
use crate::request::{ReportRequest, TypeFilter};
use crate::schema::FieldClass;

/// Key of the date field the range predicate applies to.
const DATE_FIELD: &str = "data";

/// Applies a request's predicates and ordering to a raw record slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetFilter;

impl DatasetFilter {
    /// Filters and sorts `records` per the request.
    ///
    /// Predicates apply in order: inclusive date range (records with an
    /// absent or unparseable date are excluded, not errored), then the
    /// categorical filter, then a stable sort on the request's sort key.
    /// An empty result is a valid empty dataset.
    #[must_use]
    pub fn filter<'a>(records: &'a [Record], request: &ReportRequest) -> FilteredDataset<'a> {
        let mut kept: Vec<&'a Record> = records
            .iter()
            .filter(|record| Self::within_range(record, request.date_range))
            .filter(|record| Self::matches_type(record, request.type_filter.as_ref()))
            .collect();

        if let Some(key) = &request.sort_key {
            if let Some(spec) = request.entity.field(key) {
                Self::sort_by_class(&mut kept, key, spec.class);
            }
        }

        debug!(
            entity = request.entity.slug(),
            total = records.len(),
            kept = kept.len(),
            "dataset filtered"
        );
        FilteredDataset::new(kept)
    }

    fn within_range(record: &Record, range: Option<(NaiveDate, NaiveDate)>) -> bool {
        let Some((start, end)) = range else {
            return true;
        };
        match record.get(DATE_FIELD).coerce_date() {
            Some(date) => date >= start && date <= end,
            None => false,
        }
    }

    fn matches_type(record: &Record, filter: Option<&TypeFilter>) -> bool {
        match filter {
            None => true,
            Some(TypeFilter::Exact { field, value }) => {
                record.get(field).as_text().map(str::trim) == Some(value.as_str())
            }
            Some(TypeFilter::HasValue { field }) => !record.is_absent(field),
            Some(TypeFilter::LacksValue { field }) => record.is_absent(field),
        }
    }

    /// Stable class-aware sort: text ascending case-normalized, numeric
    /// largest-first, dates most-recent-first. Ties keep arrival order.
    fn sort_by_class(records: &mut [&Record], key: &str, class: FieldClass) {
        match class {
            FieldClass::Text | FieldClass::Code => {
                records.sort_by(|a, b| {
                    let left = a.get(key).as_text().unwrap_or_default().to_lowercase();
                    let right = b.get(key).as_text().unwrap_or_default().to_lowercase();
                    left.cmp(&right)
                });
            }
            FieldClass::Currency | FieldClass::Decimal | FieldClass::Count => {
                records.sort_by(|a, b| {
                    let left = a.get(key).coerce_decimal().unwrap_or(Decimal::ZERO);
                    let right = b.get(key).coerce_decimal().unwrap_or(Decimal::ZERO);
                    right.cmp(&left)
                });
            }
            FieldClass::Date => {
                records.sort_by(|a, b| {
                    let left = a.get(key).coerce_date();
                    let right = b.get(key).coerce_date();
                    // Absent dates sink to the end of a descending sort.
                    match (left, right) {
                        (Some(l), Some(r)) => r.cmp(&l),
                        (Some(_), None) => Ordering::Less,
                        (None, Some(_)) => Ordering::Greater,
                        (None, None) => Ordering::Equal,
                    }
                });
            }
        }
    }
}
