//! Request validation tests.

use chrono::NaiveDate;
use rstest::rstest;

use super::error::RequestError;
use super::types::{ReportRequest, TypeFilter};
use crate::schema::EntityKind;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn zero_fields_is_a_configuration_error() {
    let request = ReportRequest::new(EntityKind::Expense, vec![]);
    assert_eq!(request.validate(), Err(RequestError::NoFieldsSelected));
}

#[test]
fn unknown_field_is_rejected_at_configuration_time() {
    let request = ReportRequest::new(
        EntityKind::Expense,
        vec!["total".to_string(), "cor_favorita".to_string()],
    );
    assert_eq!(
        request.validate(),
        Err(RequestError::UnknownField {
            entity: "despesas",
            key: "cor_favorita".to_string(),
        })
    );
}

#[test]
fn expense_report_without_a_period_is_rejected() {
    let request = ReportRequest::new(EntityKind::Expense, vec!["total".to_string()]);
    assert_eq!(request.validate(), Err(RequestError::DateRangeRequired));
}

#[test]
fn full_history_exports_do_not_need_a_period() {
    let request = ReportRequest::new(EntityKind::Thinning, vec!["data".to_string()]);
    assert!(request.validate().is_ok());
}

#[test]
fn inverted_date_range_is_rejected() {
    let request = ReportRequest::new(EntityKind::Expense, vec!["total".to_string()])
        .with_date_range(date(2024, 3, 1), date(2024, 1, 1));
    assert!(matches!(
        request.validate(),
        Err(RequestError::InvalidDateRange { .. })
    ));
}

#[test]
fn duplicate_fields_keep_first_occurrence_order() {
    let request = ReportRequest::new(
        EntityKind::Expense,
        vec![
            "total".to_string(),
            "data".to_string(),
            "total".to_string(),
        ],
    );
    assert_eq!(request.fields, vec!["total", "data"]);
}

#[rstest]
#[case(Some("descricao"), true)]
#[case(Some("inexistente"), false)]
#[case(None, true)]
fn sort_key_must_be_declared(#[case] sort_key: Option<&str>, #[case] ok: bool) {
    let mut request = ReportRequest::new(EntityKind::Property, vec!["descricao".to_string()]);
    if let Some(key) = sort_key {
        request = request.with_sort_key(key);
    }
    assert_eq!(request.validate().is_ok(), ok);
}

#[test]
fn valid_request_with_filter_passes() {
    let request = ReportRequest::new(
        EntityKind::Property,
        vec!["descricao".to_string(), "area_plantio".to_string()],
    )
    .with_type_filter(TypeFilter::HasValue {
        field: "arrendatario".to_string(),
    })
    .with_date_range(date(2024, 1, 1), date(2024, 12, 31));
    assert!(request.validate().is_ok());
}
