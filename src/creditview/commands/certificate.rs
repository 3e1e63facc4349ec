use crate::certificate::{CertificateExporter, Delivery, ExportFormat};
use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CreditError, Result};
use crate::model::Record;

pub fn run<D: Delivery, C: Clock>(
    records: &[Record],
    id: &str,
    format: ExportFormat,
    exporter: &mut CertificateExporter<D, C>,
) -> Result<CmdResult> {
    let record = records
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| CreditError::RecordNotFound(id.to_string()))?;

    let outcome = exporter.export(record, format)?;

    let mut result = CmdResult::default();
    let message = match &outcome.location {
        Some(path) => format!("Saved {}", path.display()),
        None => format!("Exported {}", outcome.filename),
    };
    result.add_message(CmdMessage::success(message));
    Ok(result.with_exported(outcome))
}
