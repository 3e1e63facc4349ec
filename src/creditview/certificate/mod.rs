//! # Retirement Certificates
//!
//! [`CertificateExporter::export`] turns one [`Record`] into a downloadable file:
//!
//! 1. Build a [`CertificateDocument`] (title, id, name, year, status, and a
//!    timestamp read from the exporter's [`Clock`]).
//! 2. Realize it as an [`Artifact`] in the requested [`ExportFormat`]:
//!    a self-contained HTML page ([`html`]) or a one-page PDF ([`pdf`]).
//! 3. Hand the artifact to a [`Delivery`] sink, which saves it as
//!    `certificate-<id>.html` / `certificate-<id>.pdf`.
//!
//! Given the same record and the same clock reading, the rendered content is the
//! same. A failed delivery is returned as an error so the caller can keep its
//! export dialog open (see [`crate::dialog`]).

use crate::clock::{Clock, SystemClock};
use crate::error::{CreditError, Result};
use crate::model::Record;
use serde::Serialize;
use std::fmt::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

pub mod delivery;
pub mod html;
pub mod pdf;

pub use delivery::{Delivery, DirectoryDelivery, MemoryDelivery};

pub const CERTIFICATE_TITLE: &str = "Retirement Certificate";

/// en-US style, e.g. `3/14/2024, 9:05:07 AM`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Self-contained HTML.
    Markup,
    /// Single-page PDF.
    PaginatedDocument,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markup => "html",
            ExportFormat::PaginatedDocument => "pdf",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            ExportFormat::Markup => "text/html",
            ExportFormat::PaginatedDocument => "application/pdf",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = CreditError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "html" | "markup" => Ok(ExportFormat::Markup),
            "pdf" | "paginated-document" => Ok(ExportFormat::PaginatedDocument),
            _ => Err(CreditError::invalid("export format", s, "html, pdf")),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// The fields printed on a certificate. Built per export and then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateDocument {
    pub title: &'static str,
    pub id: String,
    pub name: String,
    pub year: i32,
    pub status: String,
    pub timestamp: String,
}

impl CertificateDocument {
    pub fn new(record: &Record, timestamp: String) -> Self {
        Self {
            title: CERTIFICATE_TITLE,
            id: record.id.clone(),
            name: record.name.clone(),
            year: record.year,
            status: record.status.to_string(),
            timestamp,
        }
    }

    /// Label/value pairs in print order.
    pub fn fields(&self) -> [(&'static str, String); 5] {
        [
            ("UNIC ID", self.id.clone()),
            ("Project Name", self.name.clone()),
            ("Vintage", self.year.to_string()),
            ("Status", self.status.clone()),
            ("Timestamp", self.timestamp.clone()),
        ]
    }
}

/// `certificate-<id>.<ext>`, with characters that cannot appear in a file name
/// (path separators included) replaced by `_`.
pub fn certificate_filename(id: &str, format: ExportFormat) -> String {
    let stem: String = id
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("certificate-{}.{}", stem, format.extension())
}

/// A rendered certificate ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Returned by a successful export. Receiving it is the caller's cue to close
/// whatever selection dialog started the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportOutcome {
    pub record_id: String,
    pub format: ExportFormat,
    pub filename: String,
    pub bytes: usize,
    /// Where the sink put the file, if it has a location.
    pub location: Option<PathBuf>,
}

pub struct CertificateExporter<D: Delivery, C: Clock = SystemClock> {
    delivery: D,
    clock: C,
    timestamp_format: String,
}

impl<D: Delivery> CertificateExporter<D, SystemClock> {
    pub fn new(delivery: D) -> Self {
        Self::with_clock(delivery, SystemClock)
    }
}

impl<D: Delivery, C: Clock> CertificateExporter<D, C> {
    pub fn with_clock(delivery: D, clock: C) -> Self {
        Self {
            delivery,
            clock,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    pub fn delivery(&self) -> &D {
        &self.delivery
    }

    pub fn document(&self, record: &Record) -> Result<CertificateDocument> {
        let mut timestamp = String::new();
        write!(timestamp, "{}", self.clock.now().format(&self.timestamp_format)).map_err(|_| {
            CreditError::Config(format!(
                "invalid timestamp format: {:?}",
                self.timestamp_format
            ))
        })?;
        Ok(CertificateDocument::new(record, timestamp))
    }

    /// Renders the certificate without delivering it.
    pub fn render(&self, record: &Record, format: ExportFormat) -> Result<Artifact> {
        let document = self.document(record)?;
        let bytes = match format {
            ExportFormat::Markup => html::render(&document)?.into_bytes(),
            ExportFormat::PaginatedDocument => pdf::render(&document)?,
        };
        Ok(Artifact {
            filename: certificate_filename(&record.id, format),
            media_type: format.media_type(),
            bytes,
        })
    }

    pub fn export(&mut self, record: &Record, format: ExportFormat) -> Result<ExportOutcome> {
        let artifact = self.render(record, format)?;
        let location = self.delivery.deliver(&artifact).inspect_err(|e| {
            warn!(filename = %artifact.filename, error = %e, "certificate delivery failed");
        })?;

        info!(
            filename = %artifact.filename,
            bytes = artifact.bytes.len(),
            "certificate exported"
        );
        Ok(ExportOutcome {
            record_id: record.id.clone(),
            format,
            filename: artifact.filename,
            bytes: artifact.bytes.len(),
            location,
        })
    }
}
