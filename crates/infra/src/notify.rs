//! Notification sink that writes to the log.

use sladash_core::NotificationSink;
use sladash_domain::{Notification, NotificationLevel};
use tracing::{error, info};

/// Emits each notification as a structured log event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, notification: Notification) {
        let Notification { level, title, description } = notification;
        match level {
            NotificationLevel::Error => error!(%title, %description, "notification"),
            NotificationLevel::Success | NotificationLevel::Info => {
                info!(?level, %title, %description, "notification");
            }
        }
    }
}
