//! Port interface for the remote SLA query layer

use async_trait::async_trait;
use sladash_domain::{DateRange, Result, SlaBelowTargetPayload};

/// Fetches report payloads from the SLA API
#[async_trait]
pub trait SlaReportSource: Send + Sync {
    /// Sites below the SLA target within `range`
    async fn fetch_below_target(&self, range: &DateRange) -> Result<SlaBelowTargetPayload>;
}
