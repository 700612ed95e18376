//! `report` command end to end with in-memory ports.

use std::collections::BTreeSet;
use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use sladash_core::{ClipboardPlatform, NotificationSink, SlaReportSource};
use sladash_domain::{
    Config, CopyStrategy, DateRange, FieldId, Notification, ReportingContext, Result,
    SelectionMode, SlaBelowTargetPayload, SlaDashError,
};
use sladash_lib::cli::{ReportArgs, TodayArg};
use sladash_lib::commands::{linger_for_manual_copy, report_command};
use sladash_lib::AppContext;

const PAYLOAD: &str = r#"{
    "data": {
        "message": "Data SLA 2025-11-30",
        "totalSites": 1,
        "batteryCategories": {
            "mix": {
                "displayName": "Mix",
                "totalSites": 1,
                "sites": [{ "site": "SITE-M", "sla": 91.2, "downtime": "5h", "problem": null, "statusSP": "Potensi SP" }]
            }
        }
    }
}"#;

/// Platform with no clipboard at all.
#[derive(Default)]
struct HeadlessPlatform {
    next: Mutex<u64>,
    attached: Mutex<BTreeSet<FieldId>>,
}

#[async_trait]
impl ClipboardPlatform for HeadlessPlatform {
    fn supports_async_clipboard(&self) -> bool {
        false
    }

    async fn write_text(&self, _text: &str) -> Result<()> {
        Err(SlaDashError::Platform("no clipboard".into()))
    }

    fn attach_offscreen_field(&self, _text: &str) -> Result<FieldId> {
        Err(SlaDashError::Platform("no document".into()))
    }

    fn select_field(&self, _field: FieldId, _mode: SelectionMode) -> Result<()> {
        Ok(())
    }

    fn exec_copy(&self, _field: FieldId) -> Result<bool> {
        Ok(false)
    }

    fn remove_field(&self, field: FieldId) {
        self.attached.lock().remove(&field);
    }

    fn is_field_attached(&self, field: FieldId) -> bool {
        self.attached.lock().contains(&field)
    }

    fn show_manual_field(&self, _text: &str, _instruction: &str) -> Result<FieldId> {
        let mut next = self.next.lock();
        *next += 1;
        let id = FieldId(*next);
        self.attached.lock().insert(id);
        Ok(id)
    }
}

#[derive(Default)]
struct CountingSink(Mutex<Vec<Notification>>);

impl NotificationSink for CountingSink {
    fn notify(&self, notification: Notification) {
        self.0.lock().push(notification);
    }
}

/// Fails the test if the API is queried.
struct UnreachableSource;

#[async_trait]
impl SlaReportSource for UnreachableSource {
    async fn fetch_below_target(&self, _range: &DateRange) -> Result<SlaBelowTargetPayload> {
        Err(SlaDashError::Network("API must not be called".into()))
    }
}

fn payload_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(PAYLOAD.as_bytes()).unwrap();
    file
}

fn args(path: &std::path::Path, copy: bool) -> ReportArgs {
    ReportArgs {
        context: ReportingContext::DashboardChart,
        today: TodayArg::default(),
        payload: Some(path.to_path_buf()),
        copy,
    }
}

#[tokio::test]
async fn payload_file_is_composed_without_calling_the_api() {
    let file = payload_file();
    let ctx = AppContext::new(Config::default())
        .unwrap()
        .with_today(NaiveDate::from_ymd_opt(2025, 12, 1))
        .with_report_source(Arc::new(UnreachableSource));

    let outcome = report_command(&ctx, &args(file.path(), false)).await.unwrap();

    assert_eq!(outcome.range.start_iso(), "2025-11-01");
    assert!(outcome.text.starts_with("*LAPORAN SLA DI BAWAH 95.5% - NOVEMBER 2025*"));
    assert!(outcome.text.contains("*MIX (1 SITE)*"));
    assert!(outcome.copy.is_none());
}

#[tokio::test(start_paused = true)]
async fn headless_copy_falls_back_to_manual_and_cleans_up() {
    let file = payload_file();
    let platform = Arc::new(HeadlessPlatform::default());
    let sink = Arc::new(CountingSink::default());
    let ctx = AppContext::new(Config::default())
        .unwrap()
        .with_report_source(Arc::new(UnreachableSource))
        .with_clipboard(platform.clone())
        .with_notifier(sink.clone());

    let outcome = report_command(&ctx, &args(file.path(), true)).await.unwrap();

    let copy = outcome.copy.unwrap();
    assert_eq!(copy.strategy, CopyStrategy::ManualFallback);
    assert!(!copy.succeeded);
    assert!(platform.is_field_attached(FieldId(1)));
    assert_eq!(sink.0.lock().len(), 1);

    linger_for_manual_copy(&ctx, &outcome).await;
    assert!(!platform.is_field_attached(FieldId(1)));
}

#[tokio::test]
async fn missing_payload_file_is_not_found() {
    let ctx = AppContext::new(Config::default()).unwrap();
    let missing = std::path::Path::new("/nonexistent/sladash-payload.json");

    let err = report_command(&ctx, &args(missing, false)).await.unwrap_err();
    assert!(matches!(err, SlaDashError::NotFound(_)));
}

#[tokio::test]
async fn api_path_is_used_without_payload_file() {
    let ctx = AppContext::new(Config::default())
        .unwrap()
        .with_report_source(Arc::new(UnreachableSource));
    let args = ReportArgs {
        context: ReportingContext::DailyReport,
        today: TodayArg::default(),
        payload: None,
        copy: false,
    };

    let err = report_command(&ctx, &args).await.unwrap_err();
    assert!(matches!(err, SlaDashError::Network(_)));
}
