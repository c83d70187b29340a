//! Tests for the loosely-typed record model.

use chrono::NaiveDate;
use rstest::rstest;
use rust_decimal_macros::dec;

use super::record::{FieldValue, Record};

#[rstest]
#[case(FieldValue::Number(dec!(42.5)), Some(dec!(42.5)))]
#[case(FieldValue::Text("  120.75 ".to_string()), Some(dec!(120.75)))]
#[case(FieldValue::Text("abc".to_string()), None)]
#[case(FieldValue::Text(String::new()), None)]
#[case(FieldValue::Null, None)]
fn coerce_decimal_cases(#[case] value: FieldValue, #[case] expected: Option<rust_decimal::Decimal>) {
    assert_eq!(value.coerce_decimal(), expected);
}

#[rstest]
#[case(FieldValue::Text("2024-03-01".to_string()), Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()))]
#[case(FieldValue::Text("2024-03-01T00:00:00Z".to_string()), Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()))]
#[case(FieldValue::Text("01/03/2024".to_string()), None)]
#[case(FieldValue::Number(dec!(20240301)), None)]
#[case(FieldValue::Null, None)]
fn coerce_date_cases(#[case] value: FieldValue, #[case] expected: Option<NaiveDate>) {
    assert_eq!(value.coerce_date(), expected);
}

#[test]
fn coerce_date_tolerates_multibyte_text() {
    // The 10-byte timestamp prefix must never split a multi-byte char.
    let value = FieldValue::Text("2024-01-0é depois".to_string());
    assert_eq!(value.coerce_date(), None);

    let short = FieldValue::Text("çã".to_string());
    assert_eq!(short.coerce_date(), None);
}

#[test]
fn timestamp_date_is_not_timezone_shifted() {
    // A UTC-midnight timestamp must stay on its calendar day.
    let value = FieldValue::Text("2024-01-05T00:00:00.000Z".to_string());
    assert_eq!(
        value.coerce_date(),
        Some(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
    );
}

#[test]
fn missing_field_reads_as_null() {
    let record = Record::new().with("descricao", "Fazenda Alta");
    assert_eq!(record.get("fornecedor"), &FieldValue::Null);
    assert!(record.is_absent("fornecedor"));
    assert!(!record.is_absent("descricao"));
}

#[test]
fn blank_text_counts_as_absent() {
    let record = Record::new().with("arrendatario", "   ");
    assert!(record.is_absent("arrendatario"));
}

#[test]
fn upstream_json_maps_deserialize_into_records() {
    // The API ships loosely-typed maps: numbers, ISO dates, and free text
    // all arrive in one object.
    let record: Record = serde_json::from_str(
        r#"{"descricao": "Adubo", "total": "120.50", "quantidade": 3, "data": "2024-03-01"}"#,
    )
    .expect("record should deserialize");

    assert_eq!(record.get("total").coerce_decimal(), Some(dec!(120.50)));
    assert_eq!(record.get("quantidade").coerce_decimal(), Some(dec!(3)));
    assert_eq!(
        record.get("data").coerce_date(),
        Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    );
    assert!(!record.is_absent("descricao"));

    // And they serialize back as bare maps, not as a wrapper object.
    let value = serde_json::to_value(&record).expect("record should serialize");
    assert!(value.is_object());
    assert!(value.get("fields").is_none());
}
