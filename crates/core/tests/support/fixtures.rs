//! Payload fixtures and an in-memory `SlaReportSource`.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use sladash_core::SlaReportSource;
use sladash_domain::{
    BatteryCategories, BatteryCategory, DateRange, Result as DomainResult, SiteSlaEntry,
    SlaBelowTargetPayload, SlaDashError, StatusSp,
};

/// Build a site entry.
pub fn entry(site: &str, sla: f64, downtime: &str, problem: Option<&str>, status: StatusSp) -> SiteSlaEntry {
    SiteSlaEntry {
        site: site.to_string(),
        sla,
        downtime: downtime.to_string(),
        problem: problem.map(str::to_string),
        status_sp: status,
    }
}

/// Build a category whose `total_sites` matches its entries.
pub fn category(display_name: &str, sites: Vec<SiteSlaEntry>) -> BatteryCategory {
    BatteryCategory {
        display_name: display_name.to_string(),
        total_sites: u32::try_from(sites.len()).unwrap_or(u32::MAX),
        sites,
    }
}

/// Build a payload from the three categories, in report order.
pub fn payload(
    message: &str,
    talis5: BatteryCategory,
    mix: BatteryCategory,
    jspro: BatteryCategory,
) -> SlaBelowTargetPayload {
    let total_sites = talis5.total_sites + mix.total_sites + jspro.total_sites;
    SlaBelowTargetPayload {
        message: message.to_string(),
        total_sites,
        battery_categories: BatteryCategories { talis5, mix, jspro },
    }
}

/// Serves one fixed payload and records every requested range.
#[derive(Clone)]
pub struct StaticReportSource {
    payload: Option<SlaBelowTargetPayload>,
    requests: Arc<Mutex<Vec<DateRange>>>,
}

impl StaticReportSource {
    pub fn new(payload: SlaBelowTargetPayload) -> Self {
        Self { payload: Some(payload), requests: Arc::default() }
    }

    /// A source whose every fetch fails with a network error.
    pub fn failing() -> Self {
        Self { payload: None, requests: Arc::default() }
    }

    pub fn requests(&self) -> Vec<DateRange> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl SlaReportSource for StaticReportSource {
    async fn fetch_below_target(&self, range: &DateRange) -> DomainResult<SlaBelowTargetPayload> {
        self.requests.lock().push(*range);
        self.payload
            .clone()
            .ok_or_else(|| SlaDashError::Network("connection refused".to_string()))
    }
}
