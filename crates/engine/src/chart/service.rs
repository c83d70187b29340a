//! The chart renderer service.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use plotters::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use florestal_shared::FieldValue;

use super::error::ChartError;
use super::types::{BarOrientation, ChartKind, ChartSeries, RasterImage};
use crate::format::Formatter;

/// Default bounded wait for the draw-complete message.
const DRAW_DEADLINE: Duration = Duration::from_secs(5);

/// Caption rendered when a series has nothing drawable.
const BLANK_NOTICE: &str = "Sem dados para exibir";

/// Deterministic palette, indexed by category position and wrapping.
const PALETTE: [RGBColor; 8] = [
    RGBColor(76, 175, 80),
    RGBColor(33, 150, 243),
    RGBColor(255, 152, 0),
    RGBColor(156, 39, 176),
    RGBColor(244, 67, 54),
    RGBColor(0, 150, 136),
    RGBColor(121, 85, 72),
    RGBColor(96, 125, 139),
];

/// Rasterizes chart series on a worker thread with a bounded wait.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    deadline: Duration,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self {
            deadline: DRAW_DEADLINE,
        }
    }
}

impl ChartRenderer {
    /// Creates a renderer with a custom draw deadline.
    #[must_use]
    pub fn with_deadline(deadline: Duration) -> Self {
        Self { deadline }
    }

    /// Renders the series as a `width_px` x `height_px` RGB8 raster.
    ///
    /// The draw pass runs on a dedicated thread; this call blocks at most
    /// the configured deadline waiting for its completion message. A blank
    /// series produces a labelled placeholder, not an error.
    ///
    /// # Errors
    ///
    /// `ChartError::Draw` when the draw pass fails,
    /// `ChartError::DeadlineExceeded` when it misses the deadline, and
    /// `ChartError::InvalidDimensions` for a zero-sized target.
    pub fn render(
        &self,
        series: &ChartSeries,
        kind: ChartKind,
        width_px: u32,
        height_px: u32,
    ) -> Result<RasterImage, ChartError> {
        if width_px == 0 || height_px == 0 {
            return Err(ChartError::InvalidDimensions {
                width: width_px,
                height: height_px,
            });
        }

        let owned = series.clone();
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("chart-draw".to_string())
            .spawn(move || {
                let result = draw(&owned, kind, width_px, height_px);
                // The receiver may have given up already; nothing to do then.
                let _ = tx.send(result);
            })
            .map_err(|e| ChartError::Draw(e.to_string()))?;

        match rx.recv_timeout(self.deadline) {
            Ok(Ok(pixels)) => {
                debug!(width_px, height_px, "chart rendered");
                Ok(RasterImage {
                    width: width_px,
                    height: height_px,
                    pixels,
                })
            }
            Ok(Err(message)) => Err(ChartError::Draw(message)),
            Err(RecvTimeoutError::Timeout) => Err(ChartError::DeadlineExceeded(self.deadline)),
            Err(RecvTimeoutError::Disconnected) => Err(ChartError::WorkerGone),
        }
    }
}

/// Entry point of the worker thread.
fn draw(
    series: &ChartSeries,
    kind: ChartKind,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, String> {
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root =
            BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        if series.is_blank() {
            draw_placeholder(&root, series, width, height)?;
        } else {
            match kind {
                ChartKind::Pie => draw_pie(&root, series, width, height)?,
                ChartKind::Bar(orientation) => draw_bars(&root, series, orientation)?,
            }
        }
        root.present().map_err(|e| e.to_string())?;
    }
    Ok(buffer)
}

type Root<'a> = DrawingArea<BitMapBackend<'a>, plotters::coord::Shift>;

fn draw_placeholder(
    root: &Root<'_>,
    series: &ChartSeries,
    width: u32,
    height: u32,
) -> Result<(), String> {
    let title_style = ("sans-serif", 18).into_font().color(&BLACK);
    let notice_style = ("sans-serif", 14).into_font().color(&RGBColor(120, 120, 120));
    root.draw(&Text::new(series.title.clone(), (12, 10), title_style))
        .map_err(|e| e.to_string())?;
    root.draw(&Text::new(
        BLANK_NOTICE,
        (width as i32 / 2 - 60, height as i32 / 2),
        notice_style,
    ))
    .map_err(|e| e.to_string())?;
    Ok(())
}

fn draw_pie(
    root: &Root<'_>,
    series: &ChartSeries,
    width: u32,
    height: u32,
) -> Result<(), String> {
    // Palette slots follow the entry's position in the full series, so a
    // non-drawable category never shifts the colors of the ones after it.
    let drawable: Vec<_> = series
        .entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.value > rust_decimal::Decimal::ZERO)
        .collect();
    let sizes: Vec<f64> = drawable
        .iter()
        .map(|(_, e)| e.value.to_f64().unwrap_or(0.0))
        .collect();
    let colors: Vec<RGBColor> = drawable
        .iter()
        .map(|(i, _)| PALETTE[i % PALETTE.len()])
        .collect();
    let labels: Vec<String> = drawable.iter().map(|(_, e)| e.label.clone()).collect();

    root.draw(&Text::new(
        series.title.clone(),
        (12, 10),
        ("sans-serif", 18).into_font().color(&BLACK),
    ))
    .map_err(|e| e.to_string())?;

    let center = (width as i32 / 2, height as i32 / 2 + 10);
    let radius = f64::from(width.min(height)) * 0.35;
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 13).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 12).into_font().color(&WHITE));
    root.draw(&pie).map_err(|e| e.to_string())
}

fn draw_bars(
    root: &Root<'_>,
    series: &ChartSeries,
    orientation: BarOrientation,
) -> Result<(), String> {
    let formatter = Formatter::default();
    let bars: Vec<(String, f64, String)> = series
        .entries
        .iter()
        .map(|e| {
            (
                e.label.clone(),
                e.value.to_f64().unwrap_or(0.0).max(0.0),
                formatter.format_decimal(&FieldValue::Number(e.value), 2),
            )
        })
        .collect();
    let max_value = bars.iter().map(|(_, v, _)| *v).fold(0.0_f64, f64::max);
    let count = bars.len() as f64;
    let label_font = ("sans-serif", 11).into_font().color(&BLACK);

    match orientation {
        BarOrientation::Vertical => {
            let mut chart = ChartBuilder::on(root)
                .caption(&series.title, ("sans-serif", 18).into_font())
                .margin(12)
                .x_label_area_size(30)
                .y_label_area_size(56)
                .build_cartesian_2d(0f64..count, 0f64..max_value * 1.2)
                .map_err(|e| e.to_string())?;
            let names: Vec<String> = bars.iter().map(|(label, _, _)| label.clone()).collect();
            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_labels(bars.len())
                .x_label_formatter(&|x| {
                    names
                        .get(x.floor() as usize)
                        .cloned()
                        .unwrap_or_default()
                })
                .draw()
                .map_err(|e| e.to_string())?;
            chart
                .draw_series(bars.iter().enumerate().map(|(i, (_, value, _))| {
                    let color = PALETTE[i % PALETTE.len()];
                    let x = i as f64;
                    Rectangle::new([(x + 0.2, 0.0), (x + 0.8, *value)], color.filled())
                }))
                .map_err(|e| e.to_string())?;
            chart
                .draw_series(bars.iter().enumerate().map(|(i, (_, value, text))| {
                    Text::new(
                        text.clone(),
                        (i as f64 + 0.25, value * 1.03),
                        label_font.clone(),
                    )
                }))
                .map_err(|e| e.to_string())?;
        }
        BarOrientation::Horizontal => {
            let mut chart = ChartBuilder::on(root)
                .caption(&series.title, ("sans-serif", 18).into_font())
                .margin(12)
                .x_label_area_size(30)
                .y_label_area_size(90)
                .build_cartesian_2d(0f64..max_value * 1.2, 0f64..count)
                .map_err(|e| e.to_string())?;
            let names: Vec<String> = bars.iter().map(|(label, _, _)| label.clone()).collect();
            chart
                .configure_mesh()
                .disable_y_mesh()
                .y_labels(bars.len())
                .y_label_formatter(&|y| {
                    names
                        .get(y.floor() as usize)
                        .cloned()
                        .unwrap_or_default()
                })
                .draw()
                .map_err(|e| e.to_string())?;
            chart
                .draw_series(bars.iter().enumerate().map(|(i, (_, value, _))| {
                    let color = PALETTE[i % PALETTE.len()];
                    let y = i as f64;
                    Rectangle::new([(0.0, y + 0.2), (*value, y + 0.8)], color.filled())
                }))
                .map_err(|e| e.to_string())?;
            chart
                .draw_series(bars.iter().enumerate().map(|(i, (_, value, text))| {
                    Text::new(
                        text.clone(),
                        (value * 1.02, i as f64 + 0.45),
                        label_font.clone(),
                    )
                }))
                .map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}
