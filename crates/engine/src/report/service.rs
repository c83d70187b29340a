//! The report engine service.

use tracing::{debug, warn};

use florestal_shared::Record;

use super::error::ReportError;
use crate::aggregate::AggregateComputer;
use crate::chart::{BarOrientation, ChartKind, ChartPanel, ChartRenderer, ChartSeries, SeriesEntry};
use crate::dataset::{DatasetFilter, FilteredDataset};
use crate::document::{AssemblerOptions, DocumentAssembler, PaymentOrderContext, ReportArtifact};
use crate::request::ReportRequest;
use crate::schema::EntityKind;
use crate::sequence::OrderSequence;

/// Raster size of the pie panel, 4:3 at its 40% share.
const PIE_SIZE: (u32, u32) = (480, 360);
/// Raster size of the bar panel, matching the pie height.
const BAR_SIZE: (u32, u32) = (720, 360);

/// One entry point per report flavor; owns the chart renderer.
#[derive(Debug, Clone, Default)]
pub struct ReportEngine {
    renderer: ChartRenderer,
}

impl ReportEngine {
    /// Creates an engine with a custom chart renderer.
    #[must_use]
    pub fn with_renderer(renderer: ChartRenderer) -> Self {
        Self { renderer }
    }

    /// Generates a tabular report end to end.
    ///
    /// Validates the request, filters the records, computes aggregates
    /// (with denominators from the optional reference record), renders the
    /// chart pair, and assembles the document. A chart that fails to
    /// render is skipped and listed in `omitted_charts`; the document
    /// still finishes.
    ///
    /// # Errors
    ///
    /// `ReportError::Request` for configuration problems,
    /// `ReportError::Internal` for unexpected assembly failures.
    pub fn generate(
        &self,
        request: &ReportRequest,
        records: &[Record],
        reference: Option<&Record>,
        options: &AssemblerOptions,
    ) -> Result<ReportArtifact, ReportError> {
        request.validate()?;
        let dataset = DatasetFilter::filter(records, request);

        let metrics = match request.entity {
            EntityKind::Expense => AggregateComputer::expense_metrics(&dataset, reference),
            _ => Vec::new(),
        };
        let (panels, omitted) = self.render_panels(request, &dataset);

        let assembler = DocumentAssembler::new(options.clone());
        let mut artifact = assembler.assemble(request, &dataset, &metrics, &panels)?;
        artifact.omitted_charts = omitted;

        debug!(
            entity = request.entity.slug(),
            pages = artifact.pages,
            rows = artifact.rows_emitted,
            "report generated"
        );
        Ok(artifact)
    }

    /// Generates the payment order, claiming the next number from the
    /// injected sequence. The number is consumed even if the caller later
    /// discards the document.
    ///
    /// # Errors
    ///
    /// `ReportError::Sequence` when the sequence fails,
    /// `ReportError::Internal` for assembly failures.
    pub fn generate_payment_order(
        &self,
        sequence: &dyn OrderSequence,
        context: &PaymentOrderContext,
        records: &[Record],
        options: &AssemblerOptions,
    ) -> Result<ReportArtifact, ReportError> {
        let order_number = sequence.next()?;
        let dataset = FilteredDataset::new(records.iter().collect());
        let assembler = DocumentAssembler::new(options.clone());
        let artifact = assembler.assemble_payment_order(order_number, context, &dataset)?;
        debug!(order_number, rows = artifact.rows_emitted, "payment order generated");
        Ok(artifact)
    }

    /// Generates the per-property summary document.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::generate`].
    pub fn generate_property_summary(
        &self,
        request: &ReportRequest,
        property: &Record,
        options: &AssemblerOptions,
    ) -> Result<ReportArtifact, ReportError> {
        request.validate()?;
        let assembler = DocumentAssembler::new(options.clone());
        Ok(assembler.assemble_property_summary(request, property)?)
    }

    /// Renders the expense chart pair; other entities carry no charts.
    /// Each failed panel is logged and reported, never fatal.
    fn render_panels(
        &self,
        request: &ReportRequest,
        dataset: &FilteredDataset<'_>,
    ) -> (Vec<ChartPanel>, Vec<String>) {
        if request.entity != EntityKind::Expense || dataset.is_empty() {
            return (Vec::new(), Vec::new());
        }

        let groups = AggregateComputer::group_totals(dataset, "tipo_de_despesa", "total");
        let entries: Vec<SeriesEntry> = groups
            .into_iter()
            .map(|(label, total)| SeriesEntry::new(label, total))
            .collect();

        let requested = [
            (
                ChartSeries::new("Distribuição por Tipo", entries.clone()),
                ChartKind::Pie,
                PIE_SIZE,
            ),
            (
                ChartSeries::new("Totais por Tipo", entries),
                ChartKind::Bar(BarOrientation::Vertical),
                BAR_SIZE,
            ),
        ];

        let mut panels = Vec::new();
        let mut omitted = Vec::new();
        for (series, kind, (width, height)) in requested {
            match self.renderer.render(&series, kind, width, height) {
                Ok(image) => panels.push(ChartPanel {
                    title: series.title,
                    kind,
                    image,
                }),
                Err(error) => {
                    warn!(title = %series.title, %error, "chart panel skipped");
                    omitted.push(series.title);
                }
            }
        }
        (panels, omitted)
    }
}
