//! "Mode of shipment" donut chart.

use std::path::Path;

use plotters::element::Pie;
use plotters::prelude::*;
use tracing::info;

use crate::aggregates::aggregate::value_counts;
use crate::aggregates::types::CategoryCount;
use crate::charts::{
    Canvas, DrawResult, LABEL_FONT_SIZE, TAB_BLUE, TAB_GREEN, TAB_ORANGE, TITLE_FONT_SIZE, font,
    render_png,
};
use crate::error::Result;
use crate::table::{MODE_OF_SHIPMENT, ShipmentTable};

const TITLE: &str = "Mode of shipment";

/// Wedge colors; categories beyond the third wrap around.
pub const PALETTE: [RGBColor; 3] = [TAB_BLUE, TAB_ORANGE, TAB_GREEN];

/// Hole radius as a fraction of the outer radius (wedge width 0.35).
pub const DONUT_HOLE_RATIO: f64 = 0.65;

/// Fraction of the shorter plot side used as the outer radius.
const RADIUS_RATIO: f64 = 0.36;

pub fn wedge_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

/// Counts shipments per mode and writes the donut chart to `path`.
#[tracing::instrument(skip(table), fields(path = %path.display()))]
pub fn build(table: &ShipmentTable, path: &Path, size: (u32, u32)) -> Result<Vec<CategoryCount>> {
    let counts = value_counts(table.text_column(MODE_OF_SHIPMENT)?);
    info!(categories = counts.len(), "Shipment mode counts aggregated");

    render_png(path, size, |root| draw(root, &counts))?;
    Ok(counts)
}

fn draw(root: &Canvas<'_>, counts: &[CategoryCount]) -> DrawResult {
    let plot = root.titled(TITLE, font(TITLE_FONT_SIZE))?;
    if counts.is_empty() {
        return Ok(());
    }

    // Pie places itself in absolute backend pixels, not area coordinates.
    let (base_x, base_y) = plot.get_base_pixel();
    let (w, h) = plot.dim_in_pixel();
    let center = (base_x + (w / 2) as i32, base_y + (h / 2) as i32);
    let radius = f64::from(w.min(h)) * RADIUS_RATIO;

    let sizes: Vec<f64> = counts.iter().map(|c| c.count as f64).collect();
    let colors: Vec<RGBColor> = (0..counts.len()).map(wedge_color).collect();
    let labels: Vec<&str> = counts.iter().map(|c| c.category.as_str()).collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.donut_hole(radius * DONUT_HOLE_RATIO);
    pie.label_style(font(LABEL_FONT_SIZE).color(&BLACK));
    pie.label_offset(radius * 0.1);
    root.draw(&pie)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::DEFAULT_CHART_SIZE;
    use crate::charts::test_support::{sample_table, temp_dir};
    use std::fs;

    #[test]
    fn test_palette_cycles_past_three_categories() {
        assert_eq!(wedge_color(0), TAB_BLUE);
        assert_eq!(wedge_color(2), TAB_GREEN);
        assert_eq!(wedge_color(3), TAB_BLUE);
        assert_eq!(wedge_color(4), TAB_ORANGE);
    }

    #[test]
    fn test_build_counts_sum_to_rows() {
        let dir = temp_dir("shipment_mode");
        let path = dir.join("mode_of_shipment.png");
        let table = sample_table();

        let counts = build(&table, &path, DEFAULT_CHART_SIZE).unwrap();

        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), table.len());
        let order: Vec<_> = counts.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(order, vec!["Flight", "Ship", "Road"]);
        assert!(path.exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_build_with_more_modes_than_colors() {
        let dir = temp_dir("shipment_mode_many");
        let path = dir.join("mode_of_shipment.png");
        let csv = "Mode_of_Shipment\nShip\nRoad\nFlight\nRail\nShip\n";
        let table = ShipmentTable::from_reader(csv.as_bytes(), Path::new("t.csv")).unwrap();

        let counts = build(&table, &path, DEFAULT_CHART_SIZE).unwrap();

        assert_eq!(counts.len(), 4);
        assert!(path.exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
