//! Dataset filter tests.

use chrono::NaiveDate;
use rstest::rstest;

use florestal_shared::Record;

use super::service::DatasetFilter;
use crate::request::{ReportRequest, TypeFilter};
use crate::schema::EntityKind;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn expense(data: &str, total: &str, tipo: &str) -> Record {
    Record::new()
        .with("data", data)
        .with("total", total)
        .with("tipo_de_despesa", tipo)
}

fn expense_request() -> ReportRequest {
    ReportRequest::new(
        EntityKind::Expense,
        vec!["data".to_string(), "total".to_string()],
    )
}

#[test]
fn date_range_is_inclusive_on_both_ends() {
    let records = vec![
        expense("2024-01-01", "10", "Insumos"),
        expense("2024-02-28", "20", "Insumos"),
        expense("2024-02-29", "30", "Insumos"),
    ];
    let request = expense_request().with_date_range(date(2024, 1, 1), date(2024, 2, 28));
    let dataset = DatasetFilter::filter(&records, &request);
    assert_eq!(dataset.len(), 2);
}

#[test]
fn january_february_window_keeps_two_of_three_expenses() {
    let records = vec![
        expense("2024-01-15", "100.00", "Mudas"),
        expense("2024-02-10", "250.50", "Insumos"),
        expense("2024-03-05", "75.00", "Frete"),
    ];
    let request = expense_request().with_date_range(date(2024, 1, 1), date(2024, 2, 28));
    let dataset = DatasetFilter::filter(&records, &request);
    assert_eq!(dataset.len(), 2);
}

#[test]
fn unparseable_date_is_excluded_not_errored() {
    let records = vec![
        expense("2024-01-15", "100", "Mudas"),
        expense("quarta-feira", "200", "Mudas"),
        Record::new().with("total", "300"),
    ];
    let request = expense_request().with_date_range(date(2024, 1, 1), date(2024, 12, 31));
    let dataset = DatasetFilter::filter(&records, &request);
    assert_eq!(dataset.len(), 1);
}

#[test]
fn no_range_keeps_every_record() {
    let records = vec![expense("2024-01-15", "100", "Mudas"), expense("bogus", "1", "X")];
    let dataset = DatasetFilter::filter(&records, &expense_request());
    assert_eq!(dataset.len(), 2);
}

#[rstest]
#[case(TypeFilter::HasValue { field: "arrendatario".to_string() }, vec!["Fazenda B"])]
#[case(TypeFilter::LacksValue { field: "arrendatario".to_string() }, vec!["Fazenda A", "Sítio C"])]
fn lessee_presence_splits_leased_from_owned(
    #[case] filter: TypeFilter,
    #[case] expected: Vec<&str>,
) {
    let records = vec![
        Record::new().with("descricao", "Fazenda A"),
        Record::new()
            .with("descricao", "Fazenda B")
            .with("arrendatario", "Fulano"),
        Record::new().with("descricao", "Sítio C").with("arrendatario", "  "),
    ];
    let request = ReportRequest::new(EntityKind::Property, vec!["descricao".to_string()])
        .with_type_filter(filter);
    let dataset = DatasetFilter::filter(&records, &request);
    let names: Vec<&str> = dataset
        .iter()
        .map(|r| r.get("descricao").as_text().unwrap_or_default())
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn exact_filter_compares_raw_text() {
    let records = vec![
        expense("2024-01-01", "10", "Mudas"),
        expense("2024-01-02", "20", "Insumos"),
        expense("2024-01-03", "30", "Mudas"),
    ];
    let request = expense_request().with_type_filter(TypeFilter::Exact {
        field: "tipo_de_despesa".to_string(),
        value: "Mudas".to_string(),
    });
    assert_eq!(DatasetFilter::filter(&records, &request).len(), 2);
}

#[test]
fn text_sort_is_case_normalized_ascending() {
    let records = vec![
        Record::new().with("descricao", "cedro"),
        Record::new().with("descricao", "Araucária"),
        Record::new().with("descricao", "Bracatinga"),
    ];
    let request = ReportRequest::new(EntityKind::Property, vec!["descricao".to_string()])
        .with_sort_key("descricao");
    let dataset = DatasetFilter::filter(&records, &request);
    let order: Vec<&str> = dataset
        .iter()
        .map(|r| r.get("descricao").as_text().unwrap_or_default())
        .collect();
    assert_eq!(order, vec!["Araucária", "Bracatinga", "cedro"]);
}

#[test]
fn numeric_sort_is_largest_first() {
    let records = vec![
        Record::new().with("area_plantio", "10.5"),
        Record::new().with("area_plantio", "200"),
        Record::new().with("area_plantio", "55.2"),
    ];
    let request = ReportRequest::new(EntityKind::Property, vec!["area_plantio".to_string()])
        .with_sort_key("area_plantio");
    let dataset = DatasetFilter::filter(&records, &request);
    let order: Vec<&str> = dataset
        .iter()
        .map(|r| r.get("area_plantio").as_text().unwrap_or_default())
        .collect();
    assert_eq!(order, vec!["200", "55.2", "10.5"]);
}

#[test]
fn date_sort_is_most_recent_first_with_absent_last() {
    let records = vec![
        expense("2024-01-10", "1", "A"),
        expense("2024-06-01", "2", "B"),
        Record::new().with("total", "3"),
        expense("2024-03-15", "4", "C"),
    ];
    let request = expense_request().with_sort_key("data");
    let dataset = DatasetFilter::filter(&records, &request);
    let order: Vec<&str> = dataset
        .iter()
        .map(|r| r.get("total").as_text().unwrap_or_default())
        .collect();
    assert_eq!(order, vec!["2", "4", "1", "3"]);
}

#[test]
fn sort_is_stable_on_ties() {
    let records = vec![
        expense("2024-01-10", "100", "primeiro"),
        expense("2024-01-10", "100", "segundo"),
        expense("2024-01-10", "100", "terceiro"),
    ];
    let request = expense_request().with_sort_key("total");
    let dataset = DatasetFilter::filter(&records, &request);
    let order: Vec<&str> = dataset
        .iter()
        .map(|r| r.get("tipo_de_despesa").as_text().unwrap_or_default())
        .collect();
    assert_eq!(order, vec!["primeiro", "segundo", "terceiro"]);
}

#[test]
fn empty_input_yields_empty_dataset() {
    let dataset = DatasetFilter::filter(&[], &expense_request());
    assert!(dataset.is_empty());
}
