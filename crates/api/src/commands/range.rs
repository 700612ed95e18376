//! `range` and `period` commands

use sladash_core::date_range::monthly_summary;
use sladash_core::range_for;
use sladash_domain::Result;
use sladash_infra::InfraError;

use crate::cli::{PeriodArgs, RangeArgs};
use crate::context::AppContext;

/// Date range of a reporting context.
///
/// # Example Output
/// ```text
/// 2025-11-01..2025-11-30
/// ```
/// or, with `--json`:
/// ```json
/// { "startDate": "2025-11-01", "endDate": "2025-11-30" }
/// ```
pub fn range_command(ctx: &AppContext, args: &RangeArgs) -> Result<String> {
    let range = range_for(args.context, ctx.today());
    tracing::debug!(context = %args.context, %range, "range resolved");

    if args.json {
        Ok(serde_json::to_string_pretty(&range).map_err(InfraError::from)?)
    } else {
        Ok(range.to_string())
    }
}

/// Monthly summary period (`YYYY-MM`) and its Indonesian label.
pub fn period_command(ctx: &AppContext, args: &PeriodArgs) -> Result<String> {
    let summary = monthly_summary(ctx.today());

    if args.json {
        Ok(serde_json::to_string_pretty(&summary).map_err(InfraError::from)?)
    } else {
        Ok(format!("{}\t{}", summary.period, summary.label))
    }
}
