//! Page geometry, font tiers, and the document palette.

use printpdf::{Color, Mm, Rgb};

/// Page dimensions and margins for one document flavor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Page width.
    pub width: Mm,
    /// Page height.
    pub height: Mm,
    /// Uniform margin on all four sides.
    pub margin: Mm,
}

impl PageGeometry {
    /// A4 landscape, used by the tabular reports.
    #[must_use]
    pub const fn a4_landscape() -> Self {
        Self {
            width: Mm(297.0),
            height: Mm(210.0),
            margin: Mm(12.0),
        }
    }

    /// A4 portrait, used by the payment order and the property summary.
    #[must_use]
    pub const fn a4_portrait() -> Self {
        Self {
            width: Mm(210.0),
            height: Mm(297.0),
            margin: Mm(12.0),
        }
    }

    /// Fixed horizontal span available to content.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.width.0 - 2.0 * self.margin.0
    }

    /// Baseline of the first content line.
    #[must_use]
    pub fn top_y(&self) -> f32 {
        self.height.0 - self.margin.0
    }

    /// Lowest baseline content may occupy; the footer lives below it.
    #[must_use]
    pub fn bottom_y(&self) -> f32 {
        self.margin.0 + 10.0
    }
}

/// Font size and cell padding for the adaptive table tiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontTier {
    /// Body font size in points.
    pub size_pt: f32,
    /// Cell padding in millimetres.
    pub cell_padding: f32,
}

impl FontTier {
    /// Tier for the given selected-column count.
    #[must_use]
    pub fn for_columns(count: usize) -> Self {
        let (size_pt, cell_padding) = match count {
            0..=8 => (9.0, 3.0),
            9..=12 => (8.0, 2.5),
            13..=16 => (7.0, 2.0),
            17..=20 => (6.0, 1.5),
            _ => (5.0, 1.0),
        };
        Self {
            size_pt,
            cell_padding,
        }
    }

    /// Row height in millimetres: glyph height plus padding on both sides.
    #[must_use]
    pub fn row_height(&self) -> f32 {
        self.size_pt * 0.3528 + 2.0 * self.cell_padding
    }
}

/// Rough width of a string at the given size, for right alignment.
#[must_use]
pub fn text_width(text: &str, size_pt: f32) -> f32 {
    text.chars().count() as f32 * size_pt * 0.5 * 0.3528
}

/// Table header band, `#4CAF50`.
#[must_use]
pub fn header_green() -> Color {
    Color::Rgb(Rgb::new(0.298, 0.686, 0.314, None))
}

/// Alternating row fill, `#F8F9FA`.
#[must_use]
pub fn row_stripe() -> Color {
    Color::Rgb(Rgb::new(0.973, 0.976, 0.980, None))
}

/// Totals banner background, a light green.
#[must_use]
pub fn banner_fill() -> Color {
    Color::Rgb(Rgb::new(0.910, 0.960, 0.914, None))
}

/// Body text.
#[must_use]
pub fn ink() -> Color {
    Color::Rgb(Rgb::new(0.10, 0.10, 0.10, None))
}

/// Secondary text (subtitles, footers).
#[must_use]
pub fn muted() -> Color {
    Color::Rgb(Rgb::new(0.45, 0.45, 0.45, None))
}

/// Text over the green header band.
#[must_use]
pub fn header_text() -> Color {
    Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None))
}
