//! Formatter tests.

use chrono::NaiveDate;
use proptest::prelude::*;
use rstest::rstest;
use rust_decimal_macros::dec;

use florestal_shared::FieldValue;

use super::error::FormatError;
use super::service::{Formatter, FormatterConfig, NA_SENTINEL};

fn formatter() -> Formatter {
    Formatter::new(FormatterConfig::default())
}

#[rstest]
#[case(FieldValue::Number(dec!(350.50)), "R$ 350,50")]
#[case(FieldValue::Number(dec!(1234.5)), "R$ 1.234,50")]
#[case(FieldValue::Number(dec!(1_000_000)), "R$ 1.000.000,00")]
#[case(FieldValue::Text("49.5".to_string()), "R$ 49,50")]
#[case(FieldValue::Text("abc".to_string()), "R$ 0,00")]
#[case(FieldValue::Text(String::new()), "R$ 0,00")]
#[case(FieldValue::Null, "R$ 0,00")]
fn currency_formatting(#[case] value: FieldValue, #[case] expected: &str) {
    assert_eq!(formatter().format_currency(&value), expected);
}

#[test]
fn currency_negative_amount() {
    let out = formatter().format_currency(&FieldValue::Number(dec!(-1234.56)));
    assert_eq!(out, "R$ -1.234,56");
}

#[rstest]
#[case(FieldValue::Text("2024-03-01".to_string()), "01/03/2024")]
#[case(FieldValue::Text("2024-01-05T00:00:00.000Z".to_string()), "05/01/2024")]
#[case(FieldValue::Text("not a date".to_string()), NA_SENTINEL)]
#[case(FieldValue::Null, NA_SENTINEL)]
fn date_formatting(#[case] value: FieldValue, #[case] expected: &str) {
    assert_eq!(formatter().format_date(&value), expected);
}

#[test]
fn decimal_without_symbol() {
    let out = formatter().format_decimal(&FieldValue::Number(dec!(12.3456)), 2);
    assert_eq!(out, "12,35");
}

#[rstest]
#[case("short", 25, "short")]
#[case("exactly-ten", 11, "exactly-ten")]
#[case("uma descricao bastante longa de despesa", 25, "uma descricao bastante...")]
#[case("ABCD", 4, "ABCD")]
#[case("ABCDE", 4, "A...")]
fn truncate_cases(#[case] input: &str, #[case] budget: usize, #[case] expected: &str) {
    let out = Formatter::truncate(input, budget).unwrap();
    assert_eq!(out.as_ref(), expected);
}

#[test]
fn truncate_rejects_tiny_budget() {
    let err = Formatter::truncate("anything", 3).unwrap_err();
    assert!(matches!(err, FormatError::BudgetTooSmall(3)));
}

#[test]
fn format_date_is_not_shifted_by_timezone() {
    // A calendar date must never move a day through local-timezone parsing.
    let value = FieldValue::Date(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    assert_eq!(formatter().format_date(&value), "31/12/2024");
}

proptest! {
    /// Truncation never exceeds its budget and never fails for budgets >= 4.
    #[test]
    fn truncate_respects_budget(s in ".{0,80}", budget in 4usize..40) {
        let out = Formatter::truncate(&s, budget).unwrap();
        prop_assert!(out.chars().count() <= budget);
        if s.chars().count() <= budget {
            prop_assert_eq!(out.as_ref(), s.as_str());
        }
    }

    /// Currency formatting never panics on arbitrary text input.
    #[test]
    fn currency_never_fails(s in ".{0,40}") {
        let _ = formatter().format_currency(&FieldValue::Text(s));
    }
}
