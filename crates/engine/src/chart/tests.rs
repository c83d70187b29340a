//! Chart renderer tests.

use std::time::Duration;

use rstest::rstest;
use rust_decimal_macros::dec;

use super::error::ChartError;
use super::service::ChartRenderer;
use super::types::{BarOrientation, ChartKind, ChartSeries, SeriesEntry};

fn expense_series() -> ChartSeries {
    ChartSeries::new(
        "Despesas por Tipo",
        vec![
            SeriesEntry::new("Mudas", dec!(350.50)),
            SeriesEntry::new("Insumos", dec!(120.00)),
            SeriesEntry::new("Frete", dec!(80.25)),
        ],
    )
}

#[test]
fn zero_dimensions_are_rejected() {
    let result = ChartRenderer::default().render(&expense_series(), ChartKind::Pie, 0, 100);
    assert!(matches!(
        result,
        Err(ChartError::InvalidDimensions { width: 0, height: 100 })
    ));
}

#[rstest]
#[case(ChartKind::Pie)]
#[case(ChartKind::Bar(BarOrientation::Vertical))]
#[case(ChartKind::Bar(BarOrientation::Horizontal))]
fn render_produces_a_tightly_packed_rgb_raster(#[case] kind: ChartKind) {
    let image = ChartRenderer::default()
        .render(&expense_series(), kind, 320, 240)
        .expect("render should succeed");
    assert_eq!(image.width, 320);
    assert_eq!(image.height, 240);
    assert_eq!(image.pixels.len(), 320 * 240 * 3);
}

#[test]
fn blank_series_renders_a_placeholder_not_an_error() {
    let series = ChartSeries::new("Despesas por Tipo", vec![]);
    assert!(series.is_blank());
    let image = ChartRenderer::default()
        .render(&series, ChartKind::Pie, 200, 150)
        .expect("placeholder should render");
    // White background with dark text, so not all bytes are equal.
    assert!(image.pixels.iter().any(|b| *b != image.pixels[0]));
}

#[test]
fn all_non_positive_values_count_as_blank() {
    let series = ChartSeries::new(
        "Despesas",
        vec![
            SeriesEntry::new("A", dec!(0)),
            SeriesEntry::new("B", dec!(-5)),
        ],
    );
    assert!(series.is_blank());
}

#[test]
fn zero_valued_category_keeps_later_palette_slots_stable() {
    let renderer = ChartRenderer::default();
    let with_gap = ChartSeries::new(
        "Despesas por Tipo",
        vec![
            SeriesEntry::new("Sem lançamentos", dec!(0)),
            SeriesEntry::new("Mudas", dec!(350.50)),
        ],
    );
    let alone = ChartSeries::new(
        "Despesas por Tipo",
        vec![SeriesEntry::new("Mudas", dec!(350.50))],
    );

    let gap_image = renderer
        .render(&with_gap, ChartKind::Pie, 240, 240)
        .expect("render should succeed");
    let alone_image = renderer
        .render(&alone, ChartKind::Pie, 240, 240)
        .expect("render should succeed");

    // "Mudas" keeps its second palette slot even when the category before
    // it draws nothing, so the two rasters use different slice colors.
    assert_ne!(gap_image.pixels, alone_image.pixels);
}

#[test]
fn missed_deadline_is_reported_not_hung() {
    let renderer = ChartRenderer::with_deadline(Duration::from_nanos(1));
    let result = renderer.render(&expense_series(), ChartKind::Pie, 1200, 900);
    assert!(matches!(result, Err(ChartError::DeadlineExceeded(_))));
}
