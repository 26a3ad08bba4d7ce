//! "Shipping per Warehouse" vertical bar chart.

use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::aggregates::aggregate::value_counts;
use crate::aggregates::types::CategoryCount;
use crate::charts::{
    Canvas, DESC_FONT_SIZE, DrawResult, LABEL_FONT_SIZE, TAB_BLUE, TITLE_FONT_SIZE, font,
    render_png,
};
use crate::error::Result;
use crate::table::{ShipmentTable, WAREHOUSE_BLOCK};

const TITLE: &str = "Shipping per Warehouse";
const X_DESC: &str = "Warehouse block";
const Y_DESC: &str = "Record Count";

/// Bars are centered on their index and leave a gap to the next slot.
const BAR_WIDTH: f64 = 0.8;

/// Counts shipments per warehouse block and writes the bar chart to `path`.
#[tracing::instrument(skip(table), fields(path = %path.display()))]
pub fn build(table: &ShipmentTable, path: &Path, size: (u32, u32)) -> Result<Vec<CategoryCount>> {
    let counts = value_counts(table.text_column(WAREHOUSE_BLOCK)?);
    info!(categories = counts.len(), "Warehouse counts aggregated");

    render_png(path, size, |root| draw(root, &counts))?;
    Ok(counts)
}

/// One unit-wide slot per category, centered on `0..categories`.
fn slot_axis(categories: usize) -> Range<f64> {
    -0.5..(categories.max(1) as f64 - 0.5)
}

fn bar_span(index: usize) -> (f64, f64) {
    let center = index as f64;
    (center - BAR_WIDTH / 2.0, center + BAR_WIDTH / 2.0)
}

fn draw(root: &Canvas<'_>, counts: &[CategoryCount]) -> DrawResult {
    let slots = counts.len().max(1);
    let tallest = counts.iter().map(|c| c.count).max().unwrap_or(0) as u32;
    let y_max = (tallest + tallest / 20).max(tallest + 1);

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, font(TITLE_FONT_SIZE))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(slot_axis(counts.len()), 0u32..y_max)?;

    let label_for = |x: &f64| {
        let nearest = x.round();
        if (x - nearest).abs() > 1e-6 || nearest < 0.0 {
            return String::new();
        }
        counts
            .get(nearest as usize)
            .map(|c| c.category.clone())
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(slots)
        .x_label_formatter(&label_for)
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .label_style(font(LABEL_FONT_SIZE))
        .axis_desc_style(font(DESC_FONT_SIZE))
        .draw()?;

    chart.draw_series(counts.iter().enumerate().map(|(i, c)| {
        let (left, right) = bar_span(i);
        Rectangle::new([(left, 0), (right, c.count as u32)], TAB_BLUE.filled())
    }))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::DEFAULT_CHART_SIZE;
    use crate::charts::test_support::{sample_table, temp_dir};
    use crate::error::DashboardError;
    use std::fs;

    #[test]
    fn test_build_counts_and_writes_png() {
        let dir = temp_dir("warehouse");
        let path = dir.join("shipping_per_warehouse.png");
        let table = sample_table();

        let counts = build(&table, &path, DEFAULT_CHART_SIZE).unwrap();

        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), table.len());
        assert_eq!(counts[0].category, "F");
        assert_eq!(counts[0].count, 3);
        assert!(path.exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_axis_has_one_slot_per_category() {
        for n in [1, 2, 7] {
            let axis = slot_axis(n);
            assert_eq!(axis.end - axis.start, n as f64);

            let (first_left, _) = bar_span(0);
            let (_, last_right) = bar_span(n - 1);
            assert!(first_left > axis.start);
            assert!(last_right < axis.end);
            // no empty slot after the last bar
            assert!(axis.end - last_right < 1.0);
        }
        assert_eq!(slot_axis(0), slot_axis(1));
    }

    #[test]
    fn test_missing_column_leaves_no_file() {
        let dir = temp_dir("warehouse_missing");
        let path = dir.join("shipping_per_warehouse.png");
        let table = ShipmentTable::from_reader("Mode_of_Shipment\nShip\n".as_bytes(), Path::new("t.csv")).unwrap();

        let result = build(&table, &path, DEFAULT_CHART_SIZE);

        assert!(matches!(result, Err(DashboardError::MissingColumn { .. })));
        assert!(!path.exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
