//! SLA-below-target report service - core business logic

use std::sync::Arc;

use sladash_domain::{CopyResult, DateRange, ReportingContext, Result, SlaBelowTargetPayload};
use tracing::{debug, error};

use super::composer::compose_below_target_report;
use super::ports::SlaReportSource;
use crate::clipboard::ClipboardExporter;
use crate::clock_ports::Clock;
use crate::date_range::range_for;

/// Result of composing (and optionally copying) one report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    pub range: DateRange,
    pub text: String,
    /// `None` when the report was only composed
    pub copy: Option<CopyResult>,
}

/// Report service: clock -> date range -> fetch -> compose -> export
pub struct ReportService {
    clock: Arc<dyn Clock>,
    source: Arc<dyn SlaReportSource>,
    exporter: Option<ClipboardExporter>,
}

impl ReportService {
    /// Create a report service without clipboard export
    pub fn new(clock: Arc<dyn Clock>, source: Arc<dyn SlaReportSource>) -> Self {
        Self { clock, source, exporter: None }
    }

    /// Enable clipboard export for [`ReportService::compose_and_copy`]
    pub fn with_exporter(mut self, exporter: ClipboardExporter) -> Self {
        self.exporter = Some(exporter);
        self
    }

    /// Date range for `context` as of the clock's today
    pub fn range(&self, context: ReportingContext) -> DateRange {
        range_for(context, self.clock.today())
    }

    /// Fetch the payload for `context`'s window
    pub async fn fetch(&self, context: ReportingContext) -> Result<(DateRange, SlaBelowTargetPayload)> {
        let range = self.range(context);
        debug!(%context, %range, "fetching below-target report");

        let payload = self.source.fetch_below_target(&range).await.map_err(|err| {
            error!(%context, %range, error = %err, "failed to fetch below-target report");
            err
        })?;
        Ok((range, payload))
    }

    /// Fetch and render the report without touching the clipboard
    pub async fn compose(&self, context: ReportingContext) -> Result<ReportOutcome> {
        let (range, payload) = self.fetch(context).await?;
        Ok(ReportOutcome { range, text: compose_below_target_report(&payload), copy: None })
    }

    /// Fetch, render and copy the report.
    ///
    /// Clipboard failures never fail this call; they surface as a
    /// `CopyResult` with `succeeded == false`.
    pub async fn compose_and_copy(&self, context: ReportingContext) -> Result<ReportOutcome> {
        let mut outcome = self.compose(context).await?;
        if let Some(exporter) = &self.exporter {
            outcome.copy = Some(exporter.copy(&outcome.text).await);
        }
        Ok(outcome)
    }
}
