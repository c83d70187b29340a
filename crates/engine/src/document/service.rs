//! The document assembler service.

use std::io::{BufWriter, Cursor};

use chrono::{DateTime, Utc};
use printpdf::{
    BuiltinFont, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerIndex, PdfLayerReference, PdfPageIndex, Point, Rect,
};
use rust_decimal::Decimal;
use tracing::debug;

use florestal_shared::{FieldValue, Record, ReportId};

use super::error::DocumentError;
use super::layout::{self, FontTier, PageGeometry};
use super::types::{AssemblerOptions, PaymentOrderContext, ReportArtifact};
use crate::aggregate::{AggregateComputer, AggregateMetric, MetricKind};
use crate::chart::{ChartKind, ChartPanel, RasterImage};
use crate::dataset::FilteredDataset;
use crate::format::Formatter;
use crate::request::ReportRequest;
use crate::schema::{EntityKind, FieldClass, FieldSpec};

/// Notice rendered in place of the table when nothing matched.
pub const EMPTY_NOTICE: &str = "Nenhum registro encontrado.";

/// Fixed columns of the payment-order expense table.
const PAYMENT_ORDER_COLUMNS: [FieldSpec; 5] = [
    FieldSpec {
        key: "data",
        label: "Data",
        class: FieldClass::Date,
    },
    FieldSpec {
        key: "produto",
        label: "Produto",
        class: FieldClass::Text,
    },
    FieldSpec {
        key: "quantidade",
        label: "Quantidade",
        class: FieldClass::Count,
    },
    FieldSpec {
        key: "valor_unitario",
        label: "Valor Unitário",
        class: FieldClass::Currency,
    },
    FieldSpec {
        key: "total",
        label: "Total",
        class: FieldClass::Currency,
    },
];

/// Height of the paired chart row, in millimetres.
const CHART_ROW_HEIGHT: f32 = 70.0;

/// Assembles filtered data, aggregates, and chart panels into a PDF.
#[derive(Debug, Clone, Default)]
pub struct DocumentAssembler {
    formatter: Formatter,
    options: AssemblerOptions,
}

impl DocumentAssembler {
    /// Creates an assembler with the given options and the pt-BR formatter.
    #[must_use]
    pub fn new(options: AssemblerOptions) -> Self {
        Self {
            formatter: Formatter::default(),
            options,
        }
    }

    /// Assembles a tabular report: header, table, totals banner, metric
    /// grid, chart row, footers.
    ///
    /// An empty dataset still yields a valid single-page document with the
    /// empty notice in place of the table.
    ///
    /// # Errors
    ///
    /// `DocumentError::Request` when the request fails validation,
    /// `DocumentError::Pdf` when the PDF backend fails.
    pub fn assemble(
        &self,
        request: &ReportRequest,
        dataset: &FilteredDataset<'_>,
        metrics: &[AggregateMetric],
        panels: &[ChartPanel],
    ) -> Result<ReportArtifact, DocumentError> {
        request.validate()?;
        let id = ReportId::new();
        let generated_at = self.generated_at();
        let geometry = PageGeometry::a4_landscape();
        let mut canvas = Canvas::new(request.entity.report_title(), geometry)?;

        self.draw_report_header(&mut canvas, request.entity.report_title(), request.date_range);

        let specs: Vec<&FieldSpec> = request
            .fields
            .iter()
            .filter_map(|key| request.entity.field(key))
            .collect();

        let rows_emitted = if dataset.is_empty() {
            self.draw_empty_notice(&mut canvas);
            0
        } else {
            let heading = Some((request.entity.report_title(), request.date_range));
            let emitted = self.draw_table(&mut canvas, &specs, dataset, heading)?;
            self.draw_totals_banner(&mut canvas, &specs, dataset);
            emitted
        };

        self.draw_metric_grid(&mut canvas, metrics);
        self.draw_chart_row(&mut canvas, panels)?;

        let pages = canvas.page_count();
        self.draw_footers(&canvas, generated_at, id);
        let bytes = canvas.save()?;

        debug!(
            entity = request.entity.slug(),
            pages, rows_emitted, "report assembled"
        );
        Ok(ReportArtifact {
            id,
            bytes,
            file_name: self.file_name(request.entity, request.date_range, generated_at),
            pages,
            rows_emitted,
            omitted_charts: Vec::new(),
        })
    }

    /// Assembles the per-property summary: a portrait label/value table of
    /// the selected fields, skipping fields whose value is absent.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::assemble`].
    pub fn assemble_property_summary(
        &self,
        request: &ReportRequest,
        property: &Record,
    ) -> Result<ReportArtifact, DocumentError> {
        request.validate()?;
        let id = ReportId::new();
        let generated_at = self.generated_at();
        let geometry = PageGeometry::a4_portrait();
        let mut canvas = Canvas::new("Resumo do Imóvel", geometry)?;

        let name = property
            .get("descricao")
            .as_text()
            .unwrap_or("Imóvel")
            .to_string();
        self.draw_report_header(&mut canvas, &format!("Resumo do Imóvel — {name}"), None);

        let specs: Vec<&FieldSpec> = request
            .fields
            .iter()
            .filter_map(|key| request.entity.field(key))
            .filter(|spec| !property.is_absent(spec.key))
            .collect();

        let rows_emitted = if specs.is_empty() {
            self.draw_empty_notice(&mut canvas);
            0
        } else {
            self.draw_label_value_table(&mut canvas, &specs, property)?
        };

        let pages = canvas.page_count();
        self.draw_footers(&canvas, generated_at, id);
        let bytes = canvas.save()?;

        let hint = self.options.file_stem_hint.clone().unwrap_or(name);
        Ok(ReportArtifact {
            id,
            bytes,
            file_name: format!("{}-{}.pdf", EntityKind::Property.slug(), slugify(&hint)),
            pages,
            rows_emitted,
            omitted_charts: Vec::new(),
        })
    }

    /// Assembles the payment order: boxed header block, fixed 5-column
    /// expense table, totals row.
    ///
    /// # Errors
    ///
    /// `DocumentError::Pdf` when the PDF backend fails.
    pub fn assemble_payment_order(
        &self,
        order_number: u64,
        context: &PaymentOrderContext,
        dataset: &FilteredDataset<'_>,
    ) -> Result<ReportArtifact, DocumentError> {
        let id = ReportId::new();
        let generated_at = self.generated_at();
        let geometry = PageGeometry::a4_portrait();
        let mut canvas = Canvas::new("Ordem de Pagamento", geometry)?;

        self.draw_order_header(&mut canvas, order_number, context, generated_at);

        let specs: Vec<&FieldSpec> = PAYMENT_ORDER_COLUMNS.iter().collect();
        let rows_emitted = if dataset.is_empty() {
            self.draw_empty_notice(&mut canvas);
            0
        } else {
            // The boxed order header is a page-1 form block, never repeated.
            let emitted = self.draw_table(&mut canvas, &specs, dataset, None)?;
            self.draw_totals_banner(&mut canvas, &specs, dataset);
            emitted
        };

        let pages = canvas.page_count();
        self.draw_footers(&canvas, generated_at, id);
        let bytes = canvas.save()?;

        Ok(ReportArtifact {
            id,
            bytes,
            file_name: format!("ordem-de-pagamento-{order_number}.pdf"),
            pages,
            rows_emitted,
            omitted_charts: Vec::new(),
        })
    }

    fn generated_at(&self) -> DateTime<Utc> {
        self.options.generated_at.unwrap_or_else(Utc::now)
    }

    /// Branding header block: title plus the requested period, page 1 only
    /// unless `repeat_header_every_page` is set.
    fn draw_report_header(
        &self,
        canvas: &mut Canvas,
        title: &str,
        period: Option<(chrono::NaiveDate, chrono::NaiveDate)>,
    ) {
        let layer = canvas.layer();
        layer.set_fill_color(layout::ink());
        layer.use_text(title, 16.0, Mm(canvas.geometry.margin.0), Mm(canvas.y), &canvas.bold);
        canvas.y -= 7.0;

        if let Some((start, end)) = period {
            let subtitle = format!(
                "Relatório gerado de {} até {}",
                self.formatter.format_date(&FieldValue::Date(start)),
                self.formatter.format_date(&FieldValue::Date(end)),
            );
            layer.set_fill_color(layout::muted());
            layer.use_text(
                subtitle,
                9.0,
                Mm(canvas.geometry.margin.0),
                Mm(canvas.y),
                &canvas.regular,
            );
            canvas.y -= 6.0;
        }
        canvas.rule();
        canvas.y -= 6.0;
    }

    fn draw_empty_notice(&self, canvas: &mut Canvas) {
        let layer = canvas.layer();
        layer.set_fill_color(layout::muted());
        layer.use_text(
            EMPTY_NOTICE,
            11.0,
            Mm(canvas.geometry.margin.0 + 2.0),
            Mm(canvas.y - 4.0),
            &canvas.regular,
        );
        canvas.y -= 14.0;
    }

    /// Green header band with the column labels.
    fn draw_table_header(&self, canvas: &mut Canvas, specs: &[&FieldSpec], tier: FontTier) {
        let row_h = tier.row_height();
        let col_w = canvas.geometry.content_width() / specs.len() as f32;
        let left = canvas.geometry.margin.0;
        let layer = canvas.layer();

        layer.set_fill_color(layout::header_green());
        layer.add_rect(Rect::new(
            Mm(left),
            Mm(canvas.y - row_h),
            Mm(left + canvas.geometry.content_width()),
            Mm(canvas.y),
        ));
        layer.set_fill_color(layout::header_text());
        for (index, spec) in specs.iter().enumerate() {
            let x = left + index as f32 * col_w + tier.cell_padding;
            layer.use_text(
                spec.label,
                tier.size_pt,
                Mm(x),
                Mm(canvas.y - row_h + tier.cell_padding),
                &canvas.bold,
            );
        }
        canvas.y -= row_h;
    }

    /// The paginated data table. Rows are never split; continuation pages
    /// repeat the header row, and the branding heading too when
    /// `repeat_header_every_page` is set. Returns the emitted row count.
    fn draw_table(
        &self,
        canvas: &mut Canvas,
        specs: &[&FieldSpec],
        dataset: &FilteredDataset<'_>,
        heading: Option<(&str, Option<(chrono::NaiveDate, chrono::NaiveDate)>)>,
    ) -> Result<usize, DocumentError> {
        let tier = FontTier::for_columns(specs.len());
        let row_h = tier.row_height();
        let col_w = canvas.geometry.content_width() / specs.len() as f32;
        let left = canvas.geometry.margin.0;

        canvas.ensure_room(row_h * 2.0);
        self.draw_table_header(canvas, specs, tier);

        let mut emitted = 0usize;
        for (index, record) in dataset.iter().enumerate() {
            if canvas.ensure_room(row_h) {
                if self.options.repeat_header_every_page {
                    if let Some((title, period)) = heading {
                        self.draw_report_header(canvas, title, period);
                    }
                }
                self.draw_table_header(canvas, specs, tier);
            }
            let layer = canvas.layer();
            if index % 2 == 1 {
                layer.set_fill_color(layout::row_stripe());
                layer.add_rect(Rect::new(
                    Mm(left),
                    Mm(canvas.y - row_h),
                    Mm(left + canvas.geometry.content_width()),
                    Mm(canvas.y),
                ));
            }
            layer.set_fill_color(layout::ink());
            for (column, spec) in specs.iter().enumerate() {
                let cell = self.cell_text(record, spec)?;
                let x = if spec.class.is_numeric() {
                    left + (column + 1) as f32 * col_w
                        - tier.cell_padding
                        - layout::text_width(&cell, tier.size_pt)
                } else {
                    left + column as f32 * col_w + tier.cell_padding
                };
                layer.use_text(
                    cell,
                    tier.size_pt,
                    Mm(x),
                    Mm(canvas.y - row_h + tier.cell_padding),
                    &canvas.regular,
                );
            }
            canvas.y -= row_h;
            emitted += 1;
        }
        Ok(emitted)
    }

    /// Portrait label/value table used by the property summary.
    fn draw_label_value_table(
        &self,
        canvas: &mut Canvas,
        specs: &[&FieldSpec],
        record: &Record,
    ) -> Result<usize, DocumentError> {
        let tier = FontTier::for_columns(2);
        let row_h = tier.row_height();
        let left = canvas.geometry.margin.0;
        let mid = left + canvas.geometry.content_width() * 0.45;

        let header = [
            &FieldSpec {
                key: "campo",
                label: "Campo",
                class: FieldClass::Text,
            },
            &FieldSpec {
                key: "valor",
                label: "Valor",
                class: FieldClass::Text,
            },
        ];
        canvas.ensure_room(row_h * 2.0);
        self.draw_table_header(canvas, &header, tier);

        let mut emitted = 0usize;
        for (index, spec) in specs.iter().enumerate() {
            if canvas.ensure_room(row_h) {
                self.draw_table_header(canvas, &header, tier);
            }
            let layer = canvas.layer();
            if index % 2 == 1 {
                layer.set_fill_color(layout::row_stripe());
                layer.add_rect(Rect::new(
                    Mm(left),
                    Mm(canvas.y - row_h),
                    Mm(left + canvas.geometry.content_width()),
                    Mm(canvas.y),
                ));
            }
            layer.set_fill_color(layout::ink());
            let baseline = canvas.y - row_h + tier.cell_padding;
            layer.use_text(
                spec.label,
                tier.size_pt,
                Mm(left + tier.cell_padding),
                Mm(baseline),
                &canvas.bold,
            );
            let value = self.cell_text(record, spec)?;
            layer.use_text(
                value,
                tier.size_pt,
                Mm(mid + tier.cell_padding),
                Mm(baseline),
                &canvas.regular,
            );
            canvas.y -= row_h;
            emitted += 1;
        }
        Ok(emitted)
    }

    /// Formats one cell and applies the per-class truncation budget.
    fn cell_text(&self, record: &Record, spec: &FieldSpec) -> Result<String, DocumentError> {
        let raw = self.formatter.format_field(record.get(spec.key), spec.class);
        match spec.class.truncation_budget() {
            Some(budget) => Ok(Formatter::truncate(&raw, budget)?.into_owned()),
            None => Ok(raw),
        }
    }

    /// Totals banner directly under the table: one line per currency
    /// column, labels left, values right.
    fn draw_totals_banner(
        &self,
        canvas: &mut Canvas,
        specs: &[&FieldSpec],
        dataset: &FilteredDataset<'_>,
    ) {
        let totals: Vec<(&str, Decimal)> = specs
            .iter()
            .filter(|spec| spec.class == FieldClass::Currency)
            .map(|spec| (spec.label, AggregateComputer::sum(dataset, spec.key)))
            .collect();
        if totals.is_empty() {
            return;
        }

        let line_h = 7.0;
        let height = line_h * totals.len() as f32 + 2.0;
        // Banner stays attached to its table when it fits, otherwise moves
        // whole to the next page.
        canvas.ensure_room(height);

        let left = canvas.geometry.margin.0;
        let right = left + canvas.geometry.content_width();
        let layer = canvas.layer();
        layer.set_fill_color(layout::banner_fill());
        layer.add_rect(Rect::new(
            Mm(left),
            Mm(canvas.y - height),
            Mm(right),
            Mm(canvas.y),
        ));
        layer.set_fill_color(layout::ink());
        let mut baseline = canvas.y - line_h + 1.5;
        for (label, total) in totals {
            let value = self
                .formatter
                .format_currency(&FieldValue::Number(total));
            layer.use_text(
                format!("Total {label}"),
                9.0,
                Mm(left + 3.0),
                Mm(baseline),
                &canvas.bold,
            );
            layer.use_text(
                value.clone(),
                9.0,
                Mm(right - 3.0 - layout::text_width(&value, 9.0)),
                Mm(baseline),
                &canvas.bold,
            );
            baseline -= line_h;
        }
        canvas.y -= height + 4.0;
    }

    /// Metric grid in two fixed columns with constant row height.
    fn draw_metric_grid(&self, canvas: &mut Canvas, metrics: &[AggregateMetric]) {
        if metrics.is_empty() {
            return;
        }
        let row_h = 8.0;
        let left = canvas.geometry.margin.0;
        let half = canvas.geometry.content_width() / 2.0;

        for pair in metrics.chunks(2) {
            canvas.ensure_room(row_h);
            let layer = canvas.layer();
            for (slot, metric) in pair.iter().enumerate() {
                let x = left + slot as f32 * half;
                let value = match metric.kind {
                    MetricKind::Currency => self
                        .formatter
                        .format_currency(&FieldValue::Number(metric.value)),
                    MetricKind::Count => self
                        .formatter
                        .format_count(&FieldValue::Number(metric.value)),
                    MetricKind::Ratio => self
                        .formatter
                        .format_decimal(&FieldValue::Number(metric.value), 2),
                };
                layer.set_fill_color(layout::muted());
                layer.use_text(
                    metric.label.clone(),
                    9.0,
                    Mm(x + 2.0),
                    Mm(canvas.y - 5.0),
                    &canvas.bold,
                );
                layer.set_fill_color(layout::ink());
                layer.use_text(
                    value.clone(),
                    9.0,
                    Mm(x + half - 4.0 - layout::text_width(&value, 9.0)),
                    Mm(canvas.y - 5.0),
                    &canvas.regular,
                );
            }
            canvas.y -= row_h;
        }
        canvas.y -= 4.0;
    }

    /// The paired chart row: pie at ~40% of the content width, bar at
    /// ~60%, sharing one vertical start and height.
    fn draw_chart_row(
        &self,
        canvas: &mut Canvas,
        panels: &[ChartPanel],
    ) -> Result<(), DocumentError> {
        if panels.is_empty() {
            return Ok(());
        }
        canvas.ensure_room(CHART_ROW_HEIGHT + 4.0);
        let left = canvas.geometry.margin.0;
        let content = canvas.geometry.content_width();
        let bottom = canvas.y - CHART_ROW_HEIGHT;

        let mut x = left;
        for panel in panels {
            let width = match panel.kind {
                ChartKind::Pie => content * 0.4,
                ChartKind::Bar(_) => content * 0.6,
            };
            self.embed_image(canvas, &panel.image, x, bottom, width - 4.0, CHART_ROW_HEIGHT)?;
            x += width;
        }
        canvas.y = bottom - 6.0;
        Ok(())
    }

    fn embed_image(
        &self,
        canvas: &Canvas,
        image: &RasterImage,
        x_mm: f32,
        y_mm: f32,
        width_mm: f32,
        height_mm: f32,
    ) -> Result<(), DocumentError> {
        let buffer = printpdf::image_crate::RgbImage::from_raw(
            image.width,
            image.height,
            image.pixels.clone(),
        )
        .ok_or_else(|| DocumentError::Pdf("raster com tamanho inconsistente".to_string()))?;
        let dynamic = printpdf::image_crate::DynamicImage::ImageRgb8(buffer);
        let pdf_image = printpdf::Image::from_dynamic_image(&dynamic);

        let dpi = 300.0;
        let px_to_mm = 25.4 / dpi;
        pdf_image.add_to_layer(
            canvas.layer(),
            ImageTransform {
                translate_x: Some(Mm(x_mm)),
                translate_y: Some(Mm(y_mm)),
                scale_x: Some(width_mm / (image.width as f32 * px_to_mm)),
                scale_y: Some(height_mm / (image.height as f32 * px_to_mm)),
                dpi: Some(dpi),
                ..Default::default()
            },
        );
        Ok(())
    }

    /// Boxed payment-order header: number, cost center, property, owner,
    /// generation date.
    fn draw_order_header(
        &self,
        canvas: &mut Canvas,
        order_number: u64,
        context: &PaymentOrderContext,
        generated_at: DateTime<Utc>,
    ) {
        let left = canvas.geometry.margin.0;
        let right = left + canvas.geometry.content_width();
        let top = canvas.y;
        let height = 34.0;
        let layer = canvas.layer();

        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(left), Mm(top)), false),
                (Point::new(Mm(right), Mm(top)), false),
                (Point::new(Mm(right), Mm(top - height)), false),
                (Point::new(Mm(left), Mm(top - height)), false),
            ],
            is_closed: true,
        });

        layer.set_fill_color(layout::ink());
        layer.use_text(
            format!("ORDEM DE PAGAMENTO Nº {order_number}"),
            14.0,
            Mm(left + 4.0),
            Mm(top - 8.0),
            &canvas.bold,
        );
        let lines = [
            format!("Centro de Custo: {}", context.cost_center),
            format!("Imóvel: {}", context.property_name),
            format!("Proprietário: {}", context.owner),
            format!(
                "Data: {}",
                generated_at.format("%d/%m/%Y")
            ),
        ];
        let mut y = top - 14.0;
        for line in lines {
            layer.use_text(line, 9.0, Mm(left + 4.0), Mm(y), &canvas.regular);
            y -= 5.0;
        }
        canvas.y = top - height - 8.0;
    }

    /// Second pass over every page: rule, branding, timestamp, artifact
    /// ID, and the `Página i de n` counter.
    fn draw_footers(&self, canvas: &Canvas, generated_at: DateTime<Utc>, id: ReportId) {
        let total = canvas.page_count();
        let left = canvas.geometry.margin.0;
        let right = left + canvas.geometry.content_width();
        let id_prefix: String = id.to_string().chars().take(8).collect();

        for (index, layer) in canvas.layers().enumerate() {
            layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(left), Mm(10.0)), false),
                    (Point::new(Mm(right), Mm(10.0)), false),
                ],
                is_closed: false,
            });
            layer.set_fill_color(layout::muted());
            layer.use_text(
                format!(
                    "{} — gerado em {} — {}",
                    self.options.branding,
                    generated_at.format("%d/%m/%Y %H:%M"),
                    id_prefix,
                ),
                7.0,
                Mm(left),
                Mm(6.0),
                &canvas.regular,
            );
            let counter = format!("Página {} de {total}", index + 1);
            layer.use_text(
                counter.clone(),
                7.0,
                Mm(right - layout::text_width(&counter, 7.0)),
                Mm(6.0),
                &canvas.regular,
            );
        }
    }

    fn file_name(
        &self,
        entity: EntityKind,
        period: Option<(chrono::NaiveDate, chrono::NaiveDate)>,
        generated_at: DateTime<Utc>,
    ) -> String {
        let suffix = match (&self.options.file_stem_hint, period) {
            (Some(hint), _) => slugify(hint),
            (None, Some((start, end))) => format!("{start}-a-{end}"),
            (None, None) => generated_at.format("%Y-%m-%d").to_string(),
        };
        format!("{}-{}.pdf", entity.slug(), suffix)
    }
}

/// Running document state: the printpdf handles, the page list for the
/// footer pass, and the current baseline.
struct Canvas {
    doc: PdfDocumentReference,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    geometry: PageGeometry,
    y: f32,
    bold: IndirectFontRef,
    regular: IndirectFontRef,
}

impl Canvas {
    fn new(title: &str, geometry: PageGeometry) -> Result<Self, DocumentError> {
        let (doc, page, layer) =
            PdfDocument::new(title, geometry.width, geometry.height, "Layer 1");
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| DocumentError::Pdf(e.to_string()))?;
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| DocumentError::Pdf(e.to_string()))?;
        Ok(Self {
            doc,
            pages: vec![(page, layer)],
            geometry,
            y: geometry.top_y(),
            bold,
            regular,
        })
    }

    fn layer(&self) -> PdfLayerReference {
        let (page, layer) = self.pages[self.pages.len() - 1];
        self.doc.get_page(page).get_layer(layer)
    }

    fn layers(&self) -> impl Iterator<Item = PdfLayerReference> + '_ {
        self.pages
            .iter()
            .map(|(page, layer)| self.doc.get_page(*page).get_layer(*layer))
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Starts a new page when fewer than `needed` millimetres remain.
    /// Returns true when a page break happened.
    fn ensure_room(&mut self, needed: f32) -> bool {
        if self.y - needed < self.geometry.bottom_y() {
            let (page, layer) =
                self.doc
                    .add_page(self.geometry.width, self.geometry.height, "Layer 1");
            self.pages.push((page, layer));
            self.y = self.geometry.top_y();
            return true;
        }
        false
    }

    /// Full-width horizontal rule at the current baseline.
    fn rule(&self) {
        let left = self.geometry.margin.0;
        let right = left + self.geometry.content_width();
        self.layer().add_line(Line {
            points: vec![
                (Point::new(Mm(left), Mm(self.y)), false),
                (Point::new(Mm(right), Mm(self.y)), false),
            ],
            is_closed: false,
        });
    }

    fn save(self) -> Result<Vec<u8>, DocumentError> {
        let mut writer = BufWriter::new(Cursor::new(Vec::new()));
        self.doc
            .save(&mut writer)
            .map_err(|e| DocumentError::Pdf(e.to_string()))?;
        let cursor = writer
            .into_inner()
            .map_err(|e| DocumentError::Pdf(e.to_string()))?;
        Ok(cursor.into_inner())
    }
}

/// Lowercases and collapses non-alphanumerics into single dashes.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_dash = true;
    for c in text.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod slug_tests {
    use super::slugify;

    #[test]
    fn slugs_collapse_punctuation_and_case() {
        assert_eq!(slugify("Fazenda Santa Fé II"), "fazenda-santa-f-ii");
        assert_eq!(slugify("--Sítio--"), "s-tio");
    }
}
