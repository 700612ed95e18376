//! Clipboard export strategy selection against scripted platforms.

mod support;

use std::sync::Arc;
use std::time::Duration;

use sladash_core::ClipboardExporter;
use sladash_domain::{CopyStrategy, NotificationLevel, SelectionMode};
use support::{LegacyBehaviour, ModernBehaviour, RecordingPlatform, RecordingSink};

const REPORT: &str = "*LAPORAN SLA*\nSITE-A - SLA 89.46%";

fn exporter(platform: &RecordingPlatform, sink: &RecordingSink) -> ClipboardExporter {
    ClipboardExporter::new(Arc::new(platform.clone()), Arc::new(sink.clone()))
}

#[tokio::test]
async fn modern_clipboard_wins_when_available() {
    let platform = RecordingPlatform::new(ModernBehaviour::Succeeds, LegacyBehaviour::Succeeds);
    let sink = RecordingSink::default();

    let result = exporter(&platform, &sink).copy(REPORT).await;

    assert_eq!(result.strategy, CopyStrategy::ClipboardApi);
    assert!(result.succeeded);
    assert_eq!(platform.written(), vec![REPORT.to_string()]);
    assert!(platform.created_fields().is_empty(), "legacy tier must not run");

    let notifications = sink.received();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].level, NotificationLevel::Success);
}

#[tokio::test]
async fn legacy_command_used_without_secure_context() {
    let platform = RecordingPlatform::new(ModernBehaviour::Unavailable, LegacyBehaviour::Succeeds);
    let sink = RecordingSink::default();

    let result = exporter(&platform, &sink).copy(REPORT).await;

    assert_eq!(result.strategy, CopyStrategy::LegacyExecCommand);
    assert!(result.succeeded);
    assert_eq!(platform.created_fields().len(), 1);
    assert!(platform.attached_fields().is_empty(), "off-screen field must be removed");
    assert_eq!(sink.received().len(), 1);
}

#[tokio::test]
async fn rejected_modern_write_falls_through_to_legacy() {
    let platform = RecordingPlatform::new(ModernBehaviour::Rejects, LegacyBehaviour::Succeeds);
    let sink = RecordingSink::default();

    let result = exporter(&platform, &sink).copy(REPORT).await;

    assert_eq!(result.strategy, CopyStrategy::LegacyExecCommand);
    assert!(platform.written().is_empty());
}

#[tokio::test]
async fn touch_selection_mode_reaches_the_platform() {
    let platform = RecordingPlatform::new(ModernBehaviour::Unavailable, LegacyBehaviour::Succeeds);
    let sink = RecordingSink::default();

    exporter(&platform, &sink)
        .with_selection_mode(SelectionMode::Touch)
        .copy(REPORT)
        .await;

    assert_eq!(platform.selections(), vec![SelectionMode::Touch]);
}

#[tokio::test]
async fn legacy_field_is_removed_when_the_command_errors() {
    let platform = RecordingPlatform::new(ModernBehaviour::Unavailable, LegacyBehaviour::Errors);
    let sink = RecordingSink::default();

    let result = exporter(&platform, &sink).copy(REPORT).await;

    assert_eq!(result.strategy, CopyStrategy::ManualFallback);
    let created = platform.created_fields();
    assert_eq!(created.len(), 1);
    assert!(!platform.attached_fields().contains(&created[0]));
}

#[tokio::test(start_paused = true)]
async fn manual_field_is_shown_then_removed_after_five_seconds() {
    let platform = RecordingPlatform::new(ModernBehaviour::Unavailable, LegacyBehaviour::Refused);
    let sink = RecordingSink::default();

    let result = exporter(&platform, &sink).copy(REPORT).await;

    assert_eq!(result.strategy, CopyStrategy::ManualFallback);
    assert!(!result.succeeded);

    let manual = platform.manual_fields();
    assert_eq!(manual.len(), 1);
    assert_eq!(platform.attached_fields(), manual, "only the manual field stays visible");
    assert_eq!(platform.manual_texts()[0].0, REPORT);
    assert!(!platform.manual_texts()[0].1.is_empty());

    let notifications = sink.received();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].level, NotificationLevel::Error);

    tokio::time::sleep(Duration::from_secs(4)).await;
    assert_eq!(platform.attached_fields(), manual, "still present before the delay");

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(platform.attached_fields().is_empty());
}

#[tokio::test(start_paused = true)]
async fn manual_field_removed_early_is_left_alone() {
    let platform = RecordingPlatform::new(ModernBehaviour::Unavailable, LegacyBehaviour::Refused);
    let sink = RecordingSink::default();

    exporter(&platform, &sink)
        .with_manual_field_ttl(Duration::from_secs(1))
        .copy(REPORT)
        .await;

    let manual = platform.manual_fields()[0];
    sladash_core::ClipboardPlatform::remove_field(&platform, manual);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(platform.attached_fields().is_empty());
    assert_eq!(sink.received().len(), 1);
}
