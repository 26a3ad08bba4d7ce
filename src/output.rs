//! Log output for the aggregation summary.
//!
//! The summary never lands on disk; the dashboard's file set is exactly the
//! four charts plus the page.

use anyhow::Result;
use tracing::{debug, info};

use crate::summary::DashboardSummary;

/// Logs the summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &DashboardSummary) {
    debug!("{:#?}", summary);
}

/// Logs the summary as pretty-printed JSON.
pub fn print_json(summary: &DashboardSummary) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
