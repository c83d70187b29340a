//! The formatter service.

use std::borrow::Cow;

use rust_decimal::Decimal;

use florestal_shared::FieldValue;

use super::error::FormatError;
use crate::schema::FieldClass;

/// Sentinel rendered for dates that fail to parse.
pub const NA_SENTINEL: &str = "N/A";

/// Locale configuration for display formatting.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Currency symbol prefix (rendered with a trailing space).
    pub currency_symbol: String,
    /// Thousands grouping separator.
    pub thousands_sep: char,
    /// Decimal separator.
    pub decimal_sep: char,
    /// `chrono` format string for dates.
    pub date_format: String,
}

impl Default for FormatterConfig {
    /// Brazilian Portuguese conventions: `R$ 1.234,56`, `01/03/2024`.
    fn default() -> Self {
        Self {
            currency_symbol: "R$".to_string(),
            thousands_sep: '.',
            decimal_sep: ',',
            date_format: "%d/%m/%Y".to_string(),
        }
    }
}

/// Locale-aware conversion of raw field values into display strings.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FormatterConfig,
}

impl Formatter {
    /// Creates a formatter with the given locale configuration.
    #[must_use]
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Formats a value as currency with exactly two fraction digits.
    ///
    /// Non-numeric or absent input renders as the zero amount. Never fails.
    #[must_use]
    pub fn format_currency(&self, value: &FieldValue) -> String {
        let amount = value.coerce_decimal().unwrap_or(Decimal::ZERO);
        format!(
            "{} {}",
            self.config.currency_symbol,
            self.grouped(amount, 2)
        )
    }

    /// Formats a value as a plain decimal number.
    ///
    /// Non-numeric or absent input renders as zero. Never fails.
    #[must_use]
    pub fn format_decimal(&self, value: &FieldValue, fraction_digits: u32) -> String {
        let amount = value.coerce_decimal().unwrap_or(Decimal::ZERO);
        self.grouped(amount, fraction_digits)
    }

    /// Formats a value as a whole count, no grouping of fraction digits.
    #[must_use]
    pub fn format_count(&self, value: &FieldValue) -> String {
        let amount = value.coerce_decimal().unwrap_or(Decimal::ZERO);
        self.grouped(amount.round(), 0)
    }

    /// Formats an ISO-like date per the configured pattern.
    ///
    /// Unparseable input returns the `"N/A"` sentinel. Dates are plain
    /// calendar dates and are never shifted through a local timezone, so a
    /// record dated `2024-01-05` always prints as the 5th.
    #[must_use]
    pub fn format_date(&self, value: &FieldValue) -> String {
        match value.coerce_date() {
            Some(date) => date.format(&self.config.date_format).to_string(),
            None => NA_SENTINEL.to_string(),
        }
    }

    /// Formats a value according to its declared field class.
    ///
    /// Text and code fields come back raw here; truncation budgets are
    /// applied by the table layout, which knows the per-class budget.
    #[must_use]
    pub fn format_field(&self, value: &FieldValue, class: FieldClass) -> String {
        match class {
            FieldClass::Currency => self.format_currency(value),
            FieldClass::Decimal => self.format_decimal(value, 2),
            FieldClass::Count => self.format_count(value),
            FieldClass::Date => self.format_date(value),
            FieldClass::Text | FieldClass::Code => match value {
                FieldValue::Text(s) if !s.trim().is_empty() => s.trim().to_string(),
                FieldValue::Number(n) => n.to_string(),
                FieldValue::Date(d) => d.format(&self.config.date_format).to_string(),
                _ => NA_SENTINEL.to_string(),
            },
        }
    }

    /// Truncates `text` to at most `max_len` characters.
    ///
    /// Returns the input unchanged when it fits; otherwise the first
    /// `max_len - 3` characters followed by `...`. Budgets below 4 are a
    /// contract violation.
    pub fn truncate<'a>(text: &'a str, max_len: usize) -> Result<Cow<'a, str>, FormatError> {
        if max_len < 4 {
            return Err(FormatError::BudgetTooSmall(max_len));
        }
        if text.chars().count() <= max_len {
            return Ok(Cow::Borrowed(text));
        }
        let head: String = text.chars().take(max_len - 3).collect();
        Ok(Cow::Owned(format!("{head}...")))
    }

    /// Renders a decimal with grouping and the configured separators.
    fn grouped(&self, amount: Decimal, fraction_digits: u32) -> String {
        let negative = amount.is_sign_negative();
        let rounded = amount.abs().round_dp(fraction_digits);
        let plain = format!("{rounded:.prec$}", prec = fraction_digits as usize);

        let (int_part, frac_part) = match plain.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (plain.as_str(), None),
        };

        let mut grouped = String::with_capacity(plain.len() + int_part.len() / 3 + 1);
        if negative {
            grouped.push('-');
        }
        let digits: Vec<char> = int_part.chars().collect();
        for (i, c) in digits.iter().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.config.thousands_sep);
            }
            grouped.push(*c);
        }
        if let Some(frac) = frac_part {
            grouped.push(self.config.decimal_sep);
            grouped.push_str(frac);
        }
        grouped
    }
}
