//! Chart builders for the four dashboard figures.
//!
//! Every builder aggregates first and only then acquires a drawing surface
//! through [`render_png`], so a missing column never touches the output file.

pub mod backend;
pub mod rating_range;
pub mod shipment_mode;
pub mod warehouse;
pub mod weight_distribution;

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use tracing::debug;

use crate::charts::backend::FontSafeBackend;
use crate::error::{DashboardError, RenderFailure, Result};

pub const TAB_BLUE: RGBColor = RGBColor(31, 119, 180);
pub const TAB_ORANGE: RGBColor = RGBColor(255, 127, 14);
pub const TAB_GREEN: RGBColor = RGBColor(44, 160, 44);
pub const LIGHT_GRAY: RGBColor = RGBColor(211, 211, 211);
pub const GRAY: RGBColor = RGBColor(128, 128, 128);

/// Canvas size matching a default 6.4in x 4.8in figure at 100 dpi.
pub const DEFAULT_CHART_SIZE: (u32, u32) = (640, 480);

pub(crate) const TITLE_FONT_SIZE: f64 = 20.0;
pub(crate) const DESC_FONT_SIZE: f64 = 14.0;
pub(crate) const LABEL_FONT_SIZE: f64 = 12.0;

/// Root drawing area every builder paints on.
pub type Canvas<'a> = DrawingArea<FontSafeBackend<BitMapBackend<'a>>, Shift>;

pub(crate) type DrawResult = std::result::Result<(), RenderFailure>;

pub(crate) fn font(size: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal)
}

/// The four image files referenced by the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    ShippingPerWarehouse,
    ModeOfShipment,
    AverageCustomerRating,
    WeightDistribution,
}

impl Artifact {
    pub const ALL: [Artifact; 4] = [
        Artifact::ShippingPerWarehouse,
        Artifact::ModeOfShipment,
        Artifact::AverageCustomerRating,
        Artifact::WeightDistribution,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::ShippingPerWarehouse => "shipping_per_warehouse.png",
            Artifact::ModeOfShipment => "mode_of_shipment.png",
            Artifact::AverageCustomerRating => "average_customer_rating.png",
            Artifact::WeightDistribution => "weight_distribution.png",
        }
    }

    pub fn alt_text(self) -> &'static str {
        match self {
            Artifact::ShippingPerWarehouse => "Fig 1",
            Artifact::ModeOfShipment => "Fig 2",
            Artifact::AverageCustomerRating => "Fig 3",
            Artifact::WeightDistribution => "Fig 4",
        }
    }
}

/// Acquires a PNG surface at `path`, runs `draw`, writes the image, and
/// releases the surface before returning, on success and on failure alike.
pub fn render_png<F>(path: &Path, size: (u32, u32), draw: F) -> Result<()>
where
    F: FnOnce(&Canvas<'_>) -> DrawResult,
{
    debug!(path = %path.display(), width = size.0, height = size.1, "Acquiring drawing surface");

    let root = FontSafeBackend::new(BitMapBackend::new(path, size)).into_drawing_area();
    let outcome = paint(&root, draw);
    drop(root);

    debug!(path = %path.display(), ok = outcome.is_ok(), "Drawing surface released");

    outcome.map_err(|source| DashboardError::Render {
        path: path.to_path_buf(),
        source,
    })
}

fn paint<F>(root: &Canvas<'_>, draw: F) -> DrawResult
where
    F: FnOnce(&Canvas<'_>) -> DrawResult,
{
    root.fill(&WHITE)?;
    draw(root)?;
    root.present()?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    use crate::table::ShipmentTable;

    pub const SAMPLE: &str = "\
ID,Warehouse_block,Mode_of_Shipment,Customer_care_calls,Customer_rating,Weight_in_gms
1,D,Flight,4,2,1233
2,F,Flight,4,5,3088
3,A,Flight,2,2,3374
4,B,Ship,3,3,1177
5,C,Ship,2,2,2484
6,F,Road,3,1,1417
7,D,Ship,3,4,2371
8,F,Ship,4,1,2804
9,A,Road,3,4,1861
10,B,Flight,3,2,1187
";

    pub fn sample_table() -> ShipmentTable {
        ShipmentTable::from_reader(SAMPLE.as_bytes(), std::path::Path::new("sample.csv")).unwrap()
    }

    /// Fresh scratch directory unique to this process and test.
    pub fn temp_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("shipping_dashboard_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }
}
