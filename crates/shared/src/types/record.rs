//! The loosely-typed record model consumed by the report engine.
//!
//! Upstream records arrive from a remote API as loosely-typed field maps:
//! a "numeric" field may hold a string, a date may be absent or garbage.
//! `FieldValue` keeps the raw value and offers best-effort coercions; the
//! decision of what a failed coercion degrades to (zero, `"N/A"`, exclusion)
//! belongs to the consumers, not to this type.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single raw field value as fetched from the upstream API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A numeric value.
    Number(Decimal),
    /// A calendar date.
    Date(NaiveDate),
    /// Free text, identifiers, or stringified numbers/dates.
    Text(String),
    /// Explicitly absent.
    Null,
}

impl FieldValue {
    /// Best-effort numeric coercion.
    ///
    /// Text is parsed as a plain decimal number; anything unparseable is
    /// `None`. Callers decide whether `None` means zero or exclusion.
    #[must_use]
    pub fn coerce_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<Decimal>().ok(),
            Self::Date(_) | Self::Null => None,
        }
    }

    /// Best-effort date coercion.
    ///
    /// Text is parsed as an ISO-like date (`2024-03-01` or an RFC 3339
    /// timestamp prefix). The date is taken verbatim, never shifted through
    /// a local timezone.
    #[must_use]
    pub fn coerce_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::Text(s) => {
                let s = s.trim();
                // RFC 3339 timestamps keep the date in the first 10 bytes.
                // `get` keeps multi-byte text from splitting a char; such
                // text can never be a valid date anyway.
                let date_part = s.get(..10).unwrap_or(s);
                NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
            }
            Self::Number(_) | Self::Null => None,
        }
    }

    /// Returns the textual form of the raw value, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for `Null` and for empty/whitespace-only text.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Number(_) | Self::Date(_) => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Decimal> for FieldValue {
    fn from(n: Decimal) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Number(Decimal::from(n))
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

/// One domain entity instance (an expense line, a thinning event, an
/// inventory entry, ...), owned by the caller and referenced read-only by
/// the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, FieldValue>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Returns the raw value for `key`, or `FieldValue::Null` when the
    /// field is missing entirely.
    #[must_use]
    pub fn get(&self, key: &str) -> &FieldValue {
        self.fields.get(key).unwrap_or(&FieldValue::Null)
    }

    /// Returns true if the field is missing, null, or blank text.
    #[must_use]
    pub fn is_absent(&self, key: &str) -> bool {
        self.get(key).is_absent()
    }

    /// Number of populated fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record carries no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
