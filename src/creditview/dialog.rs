//! Export dialog state for presentation layers.
//!
//! ```text
//! Closed ──open(record)──► Open(record) ──confirm ok──► Closed
//!                              │  ▲
//!                   confirm err└──┘ (stays open for retry)
//!                              └──cancel──► Closed
//! ```
//!
//! The dialog belongs to the caller. The exporter never sees it; it only
//! receives the record and format picked here.

use crate::certificate::{CertificateExporter, Delivery, ExportFormat, ExportOutcome};
use crate::clock::Clock;
use crate::error::Result;
use crate::model::Record;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExportDialog {
    #[default]
    Closed,
    Open(Record),
}

impl ExportDialog {
    pub fn open(&mut self, record: Record) {
        *self = ExportDialog::Open(record);
    }

    pub fn cancel(&mut self) {
        *self = ExportDialog::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ExportDialog::Open(_))
    }

    pub fn selected(&self) -> Option<&Record> {
        match self {
            ExportDialog::Open(record) => Some(record),
            ExportDialog::Closed => None,
        }
    }

    /// Exports the selected record. Closes on success, stays open on failure.
    ///
    /// Returns `Ok(None)` when nothing is selected.
    pub fn confirm<D: Delivery, C: Clock>(
        &mut self,
        exporter: &mut CertificateExporter<D, C>,
        format: ExportFormat,
    ) -> Result<Option<ExportOutcome>> {
        let Some(record) = self.selected() else {
            return Ok(None);
        };
        let outcome = exporter.export(record, format)?;
        self.cancel();
        Ok(Some(outcome))
    }
}
