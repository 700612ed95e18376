//! Application context - dependency injection container

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use sladash_core::{
    ClipboardExporter, ClipboardPlatform, Clock, FixedClock, NotificationSink, ReportService,
    SlaReportSource,
};
use sladash_domain::{Config, Result, SelectionMode};
use sladash_infra::{HttpSlaReportSource, NativeClipboard, SystemClock};

use crate::adapters::TerminalNotificationSink;

/// Application context - holds the configuration and every port adapter
pub struct AppContext {
    pub config: Config,
    pub clock: Arc<dyn Clock>,
    pub report_source: Arc<dyn SlaReportSource>,
    pub clipboard: Arc<dyn ClipboardPlatform>,
    pub notifier: Arc<dyn NotificationSink>,
}

impl AppContext {
    /// Wire the production adapters from `config`.
    ///
    /// # Errors
    /// Returns `SlaDashError::Config` for an invalid timezone or API base URL.
    pub fn new(config: Config) -> Result<Self> {
        let clock = SystemClock::from_config(&config.report)?;
        let report_source = HttpSlaReportSource::from_config(&config.api)?;
        let clipboard = NativeClipboard::from_config(&config.clipboard);

        tracing::debug!(
            timezone = %clock.timezone(),
            endpoint = %report_source.endpoint(),
            "application context created"
        );

        Ok(Self {
            config,
            clock: Arc::new(clock),
            report_source: Arc::new(report_source),
            clipboard: Arc::new(clipboard),
            notifier: Arc::new(TerminalNotificationSink::stderr()),
        })
    }

    /// Pin "today" to a fixed date.
    #[must_use]
    pub fn with_today(mut self, today: Option<NaiveDate>) -> Self {
        if let Some(date) = today {
            self.clock = Arc::new(FixedClock(date));
        }
        self
    }

    pub fn with_report_source(mut self, source: Arc<dyn SlaReportSource>) -> Self {
        self.report_source = source;
        self
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn ClipboardPlatform>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn NotificationSink>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// How long the manual-copy field stays up.
    pub fn manual_field_ttl(&self) -> Duration {
        Duration::from_secs(self.config.clipboard.manual_fallback_seconds)
    }

    pub fn exporter(&self) -> ClipboardExporter {
        ClipboardExporter::new(Arc::clone(&self.clipboard), Arc::clone(&self.notifier))
            .with_selection_mode(SelectionMode::for_platform(self.config.clipboard.touch_platform))
            .with_manual_field_ttl(self.manual_field_ttl())
    }

    pub fn report_service(&self) -> ReportService {
        ReportService::new(Arc::clone(&self.clock), Arc::clone(&self.report_source))
            .with_exporter(self.exporter())
    }
}
