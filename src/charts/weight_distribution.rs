//! "Shipped Weight Distribution" histogram.

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::aggregates::aggregate::histogram;
use crate::aggregates::types::HistogramBin;
use crate::charts::{
    Canvas, DESC_FONT_SIZE, DrawResult, LABEL_FONT_SIZE, TAB_ORANGE, TITLE_FONT_SIZE, font,
    render_png,
};
use crate::error::Result;
use crate::table::{ShipmentTable, WEIGHT_IN_GMS};

const TITLE: &str = "Shipped Weight Distribution";
const Y_DESC: &str = "Frequency";

/// Bins shipment weights and writes the histogram to `path`.
#[tracing::instrument(skip(table), fields(path = %path.display()))]
pub fn build(
    table: &ShipmentTable,
    path: &Path,
    size: (u32, u32),
    bins: usize,
) -> Result<Vec<HistogramBin>> {
    let weights = table.numeric_column(WEIGHT_IN_GMS)?;
    let bins = histogram(&weights, bins);
    info!(
        values = weights.len(),
        bins = bins.len(),
        "Weight histogram computed"
    );

    render_png(path, size, |root| draw(root, &bins))?;
    Ok(bins)
}

fn draw(root: &Canvas<'_>, bins: &[HistogramBin]) -> DrawResult {
    let (x_min, x_max) = match (bins.first(), bins.last()) {
        (Some(first), Some(last)) => (first.start, last.end),
        _ => (0.0, 1.0),
    };
    let pad = (x_max - x_min) * 0.05;
    let tallest = bins.iter().map(|b| b.count).max().unwrap_or(0) as u32;
    let y_max = (tallest + tallest / 20).max(tallest + 1);

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, font(TITLE_FONT_SIZE))
        .margin(15)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d((x_min - pad)..(x_max + pad), 0u32..y_max)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .y_desc(Y_DESC)
        .x_label_formatter(&|x: &f64| format!("{x:.0}"))
        .label_style(font(LABEL_FONT_SIZE))
        .axis_desc_style(font(DESC_FONT_SIZE))
        .draw()?;

    chart.draw_series(bins.iter().map(|b| {
        Rectangle::new([(b.start, 0), (b.end, b.count as u32)], TAB_ORANGE.filled())
    }))?;
    // white edges between adjacent bars
    chart.draw_series(bins.iter().filter(|b| b.count > 0).map(|b| {
        Rectangle::new(
            [(b.start, 0), (b.end, b.count as u32)],
            ShapeStyle::from(&WHITE).stroke_width(1),
        )
    }))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::aggregate::DEFAULT_HISTOGRAM_BINS;
    use crate::charts::DEFAULT_CHART_SIZE;
    use crate::charts::test_support::{sample_table, temp_dir};
    use crate::error::DashboardError;
    use std::fs;

    #[test]
    fn test_build_bins_every_row() {
        let dir = temp_dir("weight_distribution");
        let path = dir.join("weight_distribution.png");
        let table = sample_table();

        let bins = build(&table, &path, DEFAULT_CHART_SIZE, DEFAULT_HISTOGRAM_BINS).unwrap();

        assert_eq!(bins.len(), DEFAULT_HISTOGRAM_BINS);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), table.len());
        assert_eq!(bins[0].start, 1177.0);
        assert_eq!(bins[DEFAULT_HISTOGRAM_BINS - 1].end, 3374.0);
        assert!(path.exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_weight_column() {
        let dir = temp_dir("weight_distribution_missing");
        let path = dir.join("weight_distribution.png");
        let table =
            ShipmentTable::from_reader("Warehouse_block\nA\n".as_bytes(), Path::new("t.csv")).unwrap();

        let result = build(&table, &path, DEFAULT_CHART_SIZE, DEFAULT_HISTOGRAM_BINS);

        assert!(matches!(
            result,
            Err(DashboardError::MissingColumn { ref column }) if column == WEIGHT_IN_GMS
        ));
        assert!(!path.exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
