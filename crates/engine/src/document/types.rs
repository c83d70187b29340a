//! Document assembly input and output types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use florestal_shared::ReportId;

/// Assembly knobs shared by every report flavor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblerOptions {
    /// Repeat the branding header block on every page instead of page 1
    /// only. Continuation pages always repeat the table header row
    /// regardless of this flag.
    pub repeat_header_every_page: bool,
    /// Branding text for the footer.
    pub branding: String,
    /// Fixed generation instant; `None` takes the current time. Pinned in
    /// tests so artifacts are reproducible.
    pub generated_at: Option<DateTime<Utc>>,
    /// Optional file-name stem suffix (e.g. a property name); falls back
    /// to the generation date.
    pub file_stem_hint: Option<String>,
}

impl Default for AssemblerOptions {
    fn default() -> Self {
        Self {
            repeat_header_every_page: false,
            branding: "Sis Florestal".to_string(),
            generated_at: None,
            file_stem_hint: None,
        }
    }
}

/// Fixed header-block content of a payment order, besides the number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOrderContext {
    /// Cost-center code the order is charged against.
    pub cost_center: String,
    /// Property the expenses belong to.
    pub property_name: String,
    /// Property owner.
    pub owner: String,
}

/// The finished document plus its delivery metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportArtifact {
    /// Provenance ID of this artifact, also printed in the footer.
    pub id: ReportId,
    /// The PDF bytes.
    pub bytes: Vec<u8>,
    /// Suggested download file name.
    pub file_name: String,
    /// Total page count.
    pub pages: usize,
    /// Table rows emitted across all pages; equals the dataset size.
    pub rows_emitted: usize,
    /// Titles of chart panels that failed to render and were skipped.
    pub omitted_charts: Vec<String>,
}
