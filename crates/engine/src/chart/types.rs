//! Chart input and output types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One labelled value of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    /// Category label.
    pub label: String,
    /// Category value; non-positive entries are dropped before drawing.
    pub value: Decimal,
}

impl SeriesEntry {
    /// Creates a series entry.
    #[must_use]
    pub fn new(label: impl Into<String>, value: Decimal) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// The data behind one chart: a title plus ordered category values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Chart title, drawn above the plot.
    pub title: String,
    /// Ordered categories; order fixes each category's palette color.
    pub entries: Vec<SeriesEntry>,
}

impl ChartSeries {
    /// Creates a series.
    #[must_use]
    pub fn new(title: impl Into<String>, entries: Vec<SeriesEntry>) -> Self {
        Self {
            title: title.into(),
            entries,
        }
    }

    /// True when there is nothing drawable (no entries, or all of them
    /// non-positive).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        !self.entries.iter().any(|e| e.value > Decimal::ZERO)
    }
}

/// Bar direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarOrientation {
    /// Bars grow upward.
    Vertical,
    /// Bars grow rightward.
    Horizontal,
}

/// Supported chart shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Pie with per-slice percentage labels.
    Pie,
    /// Bar chart with on-bar value labels.
    Bar(BarOrientation),
}

/// A rendered RGB8 raster, owned by the assemble call and dropped after
/// embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed RGB8 rows, `width * height * 3` bytes.
    pub pixels: Vec<u8>,
}

/// A successfully rendered chart, ready for document embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPanel {
    /// Panel title, also used when reporting an omitted panel.
    pub title: String,
    /// Shape the panel was rendered as.
    pub kind: ChartKind,
    /// The rendered raster.
    pub image: RasterImage,
}
