//! Aggregate computer tests.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use florestal_shared::{FieldValue, Record};

use super::service::{AggregateComputer, UNCATEGORIZED_LABEL};
use crate::dataset::{DatasetFilter, FilteredDataset};
use crate::format::Formatter;
use crate::request::ReportRequest;
use crate::schema::EntityKind;

fn dataset(records: &[Record]) -> FilteredDataset<'_> {
    let request = ReportRequest::new(EntityKind::Expense, vec!["total".to_string()]);
    DatasetFilter::filter(records, &request)
}

#[test]
fn sum_treats_invalid_values_as_zero() {
    let records = vec![
        Record::new().with("total", "100.25"),
        Record::new().with("total", "abc"),
        Record::new().with("total", dec!(49.75)),
        Record::new(),
    ];
    assert_eq!(AggregateComputer::sum(&dataset(&records), "total"), dec!(150.00));
}

#[test]
fn filtered_january_february_expenses_sum_to_350_50() {
    let records = vec![
        Record::new().with("data", "2024-01-15").with("total", "100.00"),
        Record::new().with("data", "2024-02-10").with("total", "250.50"),
        Record::new().with("data", "2024-03-05").with("total", "75.00"),
    ];
    let request = ReportRequest::new(EntityKind::Expense, vec!["total".to_string()])
        .with_date_range(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
        );
    let filtered = DatasetFilter::filter(&records, &request);
    assert_eq!(filtered.len(), 2);

    let total = AggregateComputer::sum(&filtered, "total");
    assert_eq!(total, dec!(350.50));
    assert_eq!(
        Formatter::default().format_currency(&FieldValue::Number(total)),
        "R$ 350,50"
    );
}

#[test]
fn ratio_degrades_to_zero_on_bad_denominators() {
    let total = dec!(1000);
    let zero_area = Record::new().with("area_plantio", dec!(0));
    let text_area = Record::new().with("area_plantio", "muitos");
    assert_eq!(AggregateComputer::ratio(total, None, "area_plantio"), Decimal::ZERO);
    assert_eq!(
        AggregateComputer::ratio(total, Some(&zero_area), "area_plantio"),
        Decimal::ZERO
    );
    assert_eq!(
        AggregateComputer::ratio(total, Some(&text_area), "area_plantio"),
        Decimal::ZERO
    );
}

#[test]
fn ratio_divides_by_the_reference_field() {
    let property = Record::new().with("num_arvores_remanescentes", 400_i64);
    assert_eq!(
        AggregateComputer::ratio(dec!(1000), Some(&property), "num_arvores_remanescentes"),
        dec!(2.5)
    );
}

#[test]
fn group_totals_keep_first_seen_order_and_bucket_absent_keys() {
    let records = vec![
        Record::new().with("tipo_de_despesa", "Mudas").with("total", "10"),
        Record::new().with("total", "5"),
        Record::new().with("tipo_de_despesa", "Insumos").with("total", "20"),
        Record::new().with("tipo_de_despesa", "Mudas").with("total", "30"),
        Record::new().with("tipo_de_despesa", "  ").with("total", "2"),
    ];
    let groups =
        AggregateComputer::group_totals(&dataset(&records), "tipo_de_despesa", "total");
    assert_eq!(
        groups,
        vec![
            ("Mudas".to_string(), dec!(40)),
            (UNCATEGORIZED_LABEL.to_string(), dec!(7)),
            ("Insumos".to_string(), dec!(20)),
        ]
    );
}

#[test]
fn percentage_of_zero_whole_is_zero() {
    assert_eq!(
        AggregateComputer::percentage_of_whole(dec!(10), Decimal::ZERO),
        Decimal::ZERO
    );
    assert_eq!(
        AggregateComputer::percentage_of_whole(dec!(1), dec!(3)).round_dp(2),
        dec!(33.33)
    );
}

#[test]
fn expense_metrics_cover_total_and_the_three_ratios() {
    let records = vec![
        Record::new().with("total", "600"),
        Record::new().with("total", "400"),
    ];
    let property = Record::new()
        .with("num_arvores_remanescentes", 500_i64)
        .with("area_plantio", dec!(25))
        .with("num_arvores_plantadas", 2000_i64);
    let metrics = AggregateComputer::expense_metrics(&dataset(&records), Some(&property));
    let values: Vec<Decimal> = metrics.iter().map(|m| m.value).collect();
    assert_eq!(values, vec![dec!(1000), dec!(2), dec!(40), dec!(0.5)]);
    assert_eq!(metrics[0].label, "Custo Total");
}

proptest! {
    /// Group totals always partition the dataset total.
    #[test]
    fn group_totals_partition_the_sum(
        rows in prop::collection::vec((0u8..5, -10_000_i64..10_000), 0..40)
    ) {
        let records: Vec<Record> = rows
            .iter()
            .map(|(group, cents)| {
                let amount = Decimal::new(*cents, 2);
                let record = Record::new().with("total", amount);
                if *group == 0 {
                    record
                } else {
                    record.with("tipo_de_despesa", format!("grupo-{group}"))
                }
            })
            .collect();
        let filtered = dataset(&records);
        let groups =
            AggregateComputer::group_totals(&filtered, "tipo_de_despesa", "total");
        let group_sum: Decimal = groups.iter().map(|(_, total)| *total).sum();
        prop_assert_eq!(group_sum, AggregateComputer::sum(&filtered, "total"));
    }
}
