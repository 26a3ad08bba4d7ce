//! "Average Customer Rating" range chart.
//!
//! One row per shipment mode. A translucent gray bar spans the observed
//! `[min, max]` rating and a narrower opaque bar runs from `min` to the
//! mean, green when the mean reaches [`RATING_THRESHOLD`] and orange
//! otherwise. The first mode (alphabetically) sits at the bottom.

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::aggregates::aggregate::rating_ranges;
use crate::aggregates::band::{RATING_THRESHOLD, RatingBand};
use crate::aggregates::types::RatingRange;
use crate::charts::{
    Canvas, DrawResult, GRAY, LABEL_FONT_SIZE, LIGHT_GRAY, TAB_GREEN, TAB_ORANGE,
    TITLE_FONT_SIZE, font, render_png,
};
use crate::error::Result;
use crate::table::{CUSTOMER_RATING, MODE_OF_SHIPMENT, ShipmentTable};

const TITLE: &str = "Average Customer Rating";

const RANGE_BAR_HEIGHT: f64 = 0.9;
const RANGE_BAR_OPACITY: f64 = 0.8;
const INDICATOR_BAR_HEIGHT: f64 = 0.5;

pub fn indicator_color(band: RatingBand) -> RGBColor {
    match band {
        RatingBand::Satisfactory => TAB_GREEN,
        RatingBand::BelowThreshold => TAB_ORANGE,
    }
}

/// Computes per-mode rating ranges and writes the range chart to `path`.
#[tracing::instrument(skip(table), fields(path = %path.display()))]
pub fn build(table: &ShipmentTable, path: &Path, size: (u32, u32)) -> Result<Vec<RatingRange>> {
    let ranges = rating_ranges(table.paired_columns(MODE_OF_SHIPMENT, CUSTOMER_RATING)?);
    info!(
        modes = ranges.len(),
        below_threshold = ranges
            .iter()
            .filter(|r| r.band() == RatingBand::BelowThreshold)
            .count(),
        threshold = RATING_THRESHOLD,
        "Rating ranges aggregated"
    );

    render_png(path, size, |root| draw(root, &ranges))?;
    Ok(ranges)
}

fn draw(root: &Canvas<'_>, ranges: &[RatingRange]) -> DrawResult {
    let rows = ranges.len().max(1);
    let x_max = ranges.iter().map(|r| r.max).fold(0.0, f64::max).max(1.0) * 1.05;

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, font(TITLE_FONT_SIZE))
        .margin(15)
        .x_label_area_size(35)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max, -0.5..(rows as f64 - 0.5))?;

    let label_for = |y: &f64| {
        let nearest = y.round();
        if (y - nearest).abs() > 1e-6 || nearest < 0.0 {
            return String::new();
        }
        ranges
            .get(nearest as usize)
            .map(|r| r.mode.clone())
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .disable_mesh()
        .axis_style(GRAY)
        .y_labels(rows)
        .y_label_formatter(&label_for)
        .x_label_formatter(&|x: &f64| format!("{x:.1}"))
        .label_style(font(LABEL_FONT_SIZE))
        .draw()?;

    chart.draw_series(ranges.iter().enumerate().map(|(i, r)| {
        let y = i as f64;
        let half = RANGE_BAR_HEIGHT / 2.0;
        Rectangle::new(
            [(r.min, y - half), (r.max, y + half)],
            LIGHT_GRAY.mix(RANGE_BAR_OPACITY).filled(),
        )
    }))?;

    chart.draw_series(ranges.iter().enumerate().map(|(i, r)| {
        let y = i as f64;
        let half = INDICATOR_BAR_HEIGHT / 2.0;
        Rectangle::new(
            [(r.min, y - half), (r.mean, y + half)],
            indicator_color(r.band()).filled(),
        )
    }))?;

    Ok(())
}
