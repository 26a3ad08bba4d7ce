//! Static HTML page that lays the four charts out in two columns.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::charts::Artifact;
use crate::error::{DashboardError, Result};

pub const HEADING: &str = "Shipping Dashboard Example";

const LEFT_COLUMN: [Artifact; 2] = [Artifact::ShippingPerWarehouse, Artifact::ModeOfShipment];
const RIGHT_COLUMN: [Artifact; 2] = [
    Artifact::AverageCustomerRating,
    Artifact::WeightDistribution,
];

fn column(artifacts: &[Artifact]) -> String {
    let images: Vec<String> = artifacts
        .iter()
        .map(|a| format!(r#"        <img src="{}" alt="{}">"#, a.file_name(), a.alt_text()))
        .collect();
    format!(
        r#"    <div style="width:45%;float:left">
{}
    </div>"#,
        images.join("\n")
    )
}

/// Renders the dashboard document. Image paths are bare file names, so the
/// page must sit in the same directory as the charts.
pub fn render_html() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{HEADING}</title>
</head>
<body>
    <h1>{HEADING}</h1>
{left}
{right}
</body>
</html>
"#,
        left = column(&LEFT_COLUMN),
        right = column(&RIGHT_COLUMN),
    )
}

/// Writes the dashboard page to `path`, replacing any existing file.
///
/// The referenced images are not checked for existence.
pub fn write_dashboard(path: &Path) -> Result<()> {
    fs::write(path, render_html()).map_err(|source| DashboardError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Dashboard page written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_html_references_each_chart_once() {
        let html = render_html();
        assert_eq!(html.matches("<img ").count(), 4);
        for artifact in Artifact::ALL {
            let src = format!("src=\"{}\"", artifact.file_name());
            assert_eq!(html.matches(&src).count(), 1, "{src}");
        }
    }

    #[test]
    fn test_html_layout() {
        let html = render_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Shipping Dashboard Example</h1>"));
        assert_eq!(html.matches("width:45%;float:left").count(), 2);

        // left column holds figures 1 and 2, right column 3 and 4
        let warehouse = html.find("shipping_per_warehouse.png").unwrap();
        let mode = html.find("mode_of_shipment.png").unwrap();
        let second_div = html.rfind("<div").unwrap();
        let rating = html.find("average_customer_rating.png").unwrap();
        assert!(warehouse < second_div && mode < second_div);
        assert!(rating > second_div);
    }

    #[test]
    fn test_alt_texts_are_distinct() {
        let html = render_html();
        for alt in ["Fig 1", "Fig 2", "Fig 3", "Fig 4"] {
            assert_eq!(html.matches(&format!("alt=\"{alt}\"")).count(), 1);
        }
    }

    #[test]
    fn test_write_dashboard_overwrites() {
        let path = env::temp_dir().join("shipping_dashboard_page_test.html");
        fs::write(&path, "stale").unwrap();

        write_dashboard(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, render_html());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_dashboard_into_missing_dir_fails() {
        let path = env::temp_dir()
            .join("shipping_dashboard_no_such_dir")
            .join("index.html");
        let result = write_dashboard(&path);
        assert!(matches!(result, Err(DashboardError::Write { .. })));
    }
}
