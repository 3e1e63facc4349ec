//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It loads the record collection from its [`RecordSource`] and
//! dispatches to `commands::*`, returning structured [`CmdResult`]s.
//!
//! `CreditApi` is generic over the source, the certificate delivery sink and the
//! clock:
//! - Production: `CreditApi<JsonFileSource, DirectoryDelivery>`
//! - Testing: `CreditApi<InMemorySource, MemoryDelivery, ManualClock>`
//!
//! Hosts that keep a live view (an interactive UI) use [`CreditApi::pipeline`]
//! and drive the returned [`ViewPipeline`] directly.

use crate::certificate::{CertificateExporter, Delivery, ExportFormat};
use crate::clock::{Clock, SystemClock};
use crate::commands;
use crate::config::ViewConfig;
use crate::error::Result;
use crate::pipeline::{ViewOptions, ViewPipeline};
use crate::source::RecordSource;

pub struct CreditApi<S: RecordSource, D: Delivery, C: Clock + Clone = SystemClock> {
    source: S,
    exporter: CertificateExporter<D, C>,
    options: ViewOptions,
    clock: C,
}

impl<S: RecordSource, D: Delivery> CreditApi<S, D, SystemClock> {
    pub fn new(source: S, delivery: D, config: &ViewConfig) -> Self {
        Self::with_clock(source, delivery, config, SystemClock)
    }
}

impl<S: RecordSource, D: Delivery, C: Clock + Clone> CreditApi<S, D, C> {
    pub fn with_clock(source: S, delivery: D, config: &ViewConfig, clock: C) -> Self {
        let exporter = CertificateExporter::with_clock(delivery, clock.clone())
            .with_timestamp_format(config.timestamp_format.clone());
        Self {
            source,
            exporter,
            options: config.view_options(),
            clock,
        }
    }

    pub fn list(&self, request: &commands::list::ListRequest) -> Result<commands::CmdResult> {
        let records = self.source.load()?;
        commands::list::run(records, self.options, self.clock.clone(), request)
    }

    pub fn export_certificate(
        &mut self,
        id: &str,
        format: ExportFormat,
    ) -> Result<commands::CmdResult> {
        let records = self.source.load()?;
        commands::certificate::run(&records, id, format, &mut self.exporter)
    }

    /// A live pipeline over the current collection.
    pub fn pipeline(&self) -> Result<ViewPipeline<C>> {
        ViewPipeline::new(self.source.load()?, self.options, self.clock.clone())
    }

    pub fn exporter(&mut self) -> &mut CertificateExporter<D, C> {
        &mut self.exporter
    }
}

pub use crate::commands::list::ListRequest;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
