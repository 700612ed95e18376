//! `report` command

use std::path::Path;
use std::time::Duration;

use sladash_core::{compose_below_target_report, ReportOutcome};
use sladash_domain::{CopyStrategy, Result, SlaBelowTargetPayload};
use sladash_infra::api::parse_below_target_body;
use sladash_infra::InfraError;

use crate::cli::ReportArgs;
use crate::context::AppContext;

const MANUAL_FIELD_GRACE: Duration = Duration::from_millis(100);

/// Compose the below-target report, optionally copying it.
///
/// The payload comes from `--payload` when given, otherwise from the API for
/// the context's date range.
pub async fn report_command(ctx: &AppContext, args: &ReportArgs) -> Result<ReportOutcome> {
    let service = ctx.report_service();

    let Some(path) = &args.payload else {
        return if args.copy {
            service.compose_and_copy(args.context).await
        } else {
            service.compose(args.context).await
        };
    };

    let payload = read_payload_file(path)?;
    let text = compose_below_target_report(&payload);
    let copy = if args.copy { Some(ctx.exporter().copy(&text).await) } else { None };

    Ok(ReportOutcome { range: service.range(args.context), text, copy })
}

/// Load a saved API response from disk.
pub fn read_payload_file(path: &Path) -> Result<SlaBelowTargetPayload> {
    let body = std::fs::read(path).map_err(InfraError::from)?;
    parse_below_target_body(&body)
}

/// Keep the process alive while a manual-copy field is on screen, so its
/// scheduled removal runs before exit.
pub async fn linger_for_manual_copy(ctx: &AppContext, outcome: &ReportOutcome) {
    let manual = outcome.copy.is_some_and(|copy| copy.strategy == CopyStrategy::ManualFallback);
    if manual {
        tokio::time::sleep(ctx.manual_field_ttl() + MANUAL_FIELD_GRACE).await;
        tokio::task::yield_now().await;
    }
}
