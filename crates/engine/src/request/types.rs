//! Report request types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::RequestError;
use crate::schema::EntityKind;

/// Categorical predicate applied after the date-range filter.
///
/// `HasValue`/`LacksValue` express derived splits such as leased vs. owned
/// properties (presence or absence of a lessee).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TypeFilter {
    /// Keep records whose raw field text equals `value` exactly.
    Exact {
        /// Field to compare.
        field: String,
        /// Expected raw text value.
        value: String,
    },
    /// Keep records where the field is populated (e.g. leased properties).
    HasValue {
        /// Field that must be present.
        field: String,
    },
    /// Keep records where the field is absent (e.g. owned properties).
    LacksValue {
        /// Field that must be absent.
        field: String,
    },
}

/// The immutable configuration for one report generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Entity kind being reported on.
    pub entity: EntityKind,
    /// Ordered set of selected field keys (columns).
    pub fields: Vec<String>,
    /// Inclusive date range over the entity's `data` field.
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    /// Optional categorical predicate.
    pub type_filter: Option<TypeFilter>,
    /// Optional sort key; must be a declared field.
    pub sort_key: Option<String>,
}

impl ReportRequest {
    /// Creates a request with the given entity and selected fields.
    ///
    /// Duplicate field keys are dropped, keeping first occurrence order.
    #[must_use]
    pub fn new(entity: EntityKind, fields: Vec<String>) -> Self {
        let mut deduped: Vec<String> = Vec::with_capacity(fields.len());
        for key in fields {
            if !deduped.contains(&key) {
                deduped.push(key);
            }
        }
        Self {
            entity,
            fields: deduped,
            date_range: None,
            type_filter: None,
            sort_key: None,
        }
    }

    /// Sets the inclusive date range.
    #[must_use]
    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date_range = Some((start, end));
        self
    }

    /// Sets the categorical predicate.
    #[must_use]
    pub fn with_type_filter(mut self, filter: TypeFilter) -> Self {
        self.type_filter = Some(filter);
        self
    }

    /// Sets the sort key.
    #[must_use]
    pub fn with_sort_key(mut self, key: impl Into<String>) -> Self {
        self.sort_key = Some(key.into());
        self
    }

    /// Validates the request against the declared entity schema.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::NoFieldsSelected` when no fields are
    /// selected, `RequestError::UnknownField` / `UnknownSortKey` for keys
    /// missing from the schema, `RequestError::InvalidDateRange` when the
    /// range is inverted, and `RequestError::DateRangeRequired` when a
    /// period-driven entity kind has no range at all.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.fields.is_empty() {
            return Err(RequestError::NoFieldsSelected);
        }
        for key in &self.fields {
            if self.entity.field(key).is_none() {
                return Err(RequestError::UnknownField {
                    entity: self.entity.slug(),
                    key: key.clone(),
                });
            }
        }
        if let Some(key) = &self.sort_key {
            if self.entity.field(key).is_none() {
                return Err(RequestError::UnknownSortKey(key.clone()));
            }
        }
        match self.date_range {
            Some((start, end)) if start > end => {
                return Err(RequestError::InvalidDateRange { start, end });
            }
            None if self.entity.requires_date_range() => {
                return Err(RequestError::DateRangeRequired);
            }
            _ => {}
        }
        Ok(())
    }
}
