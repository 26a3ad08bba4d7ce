//! Runs the whole dashboard build: directory, table, four charts, page.

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::charts::{
    Artifact, rating_range, shipment_mode, warehouse, weight_distribution,
};
use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::fonts;
use crate::output::{print_json, print_pretty};
use crate::summary::DashboardSummary;
use crate::table::ShipmentTable;

/// What a successful run produced.
#[derive(Debug)]
pub struct DashboardReport {
    pub page: PathBuf,
    pub artifacts: Vec<PathBuf>,
    pub summary: DashboardSummary,
}

/// Builds the dashboard described by `config`.
///
/// The output directory is created before the table is loaded, so a missing
/// input leaves an empty directory behind. Any error stops the run; charts
/// written before the failure are kept and the page is not written.
#[tracing::instrument(
    skip(config),
    fields(input = %config.input.display(), output_dir = %config.output_dir.display())
)]
pub fn run(config: &DashboardConfig) -> Result<DashboardReport> {
    fs::create_dir_all(&config.output_dir).map_err(|source| DashboardError::Write {
        path: config.output_dir.clone(),
        source,
    })?;

    if fonts::install(config.font_path()).is_none() {
        warn!("Charts will be rendered without text");
    }

    let table = ShipmentTable::load(&config.input)?;
    info!(rows = table.len(), "Shipment table ready");

    let mut summary = DashboardSummary::new(&config.input.display().to_string(), table.len());
    let size = config.chart_size;

    summary.warehouse_counts = warehouse::build(
        &table,
        &config.artifact_path(Artifact::ShippingPerWarehouse),
        size,
    )?;
    summary.mode_counts = shipment_mode::build(
        &table,
        &config.artifact_path(Artifact::ModeOfShipment),
        size,
    )?;
    summary.rating_ranges = rating_range::build(
        &table,
        &config.artifact_path(Artifact::AverageCustomerRating),
        size,
    )?;
    summary.weight_bins = weight_distribution::build(
        &table,
        &config.artifact_path(Artifact::WeightDistribution),
        size,
        config.histogram_bins,
    )?;

    let page = config.page_path();
    crate::page::write_dashboard(&page)?;

    print_pretty(&summary);
    if config.summary_json
        && let Err(e) = print_json(&summary)
    {
        warn!(error = %e, "Could not serialize dashboard summary");
    }

    Ok(DashboardReport {
        page,
        artifacts: Artifact::ALL
            .iter()
            .map(|&a| config.artifact_path(a))
            .collect(),
        summary,
    })
}
