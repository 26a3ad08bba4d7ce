//! Run configuration: where to read, where to write, and how to draw.

use std::path::{Path, PathBuf};

use crate::aggregates::aggregate::DEFAULT_HISTOGRAM_BINS;
use crate::charts::{Artifact, DEFAULT_CHART_SIZE};

pub const DEFAULT_INPUT: &str = "files/input/shipping-data.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "docs";
pub const PAGE_FILE_NAME: &str = "index.html";

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// CSV file with the shipment records.
    pub input: PathBuf,
    /// Directory receiving the four charts and the page; created if absent.
    pub output_dir: PathBuf,
    /// TrueType font for chart text. Falls back to common system fonts.
    pub font_path: Option<PathBuf>,
    pub chart_size: (u32, u32),
    pub histogram_bins: usize,
    /// Log the aggregation summary as JSON at info level.
    pub summary_json: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            font_path: None,
            chart_size: DEFAULT_CHART_SIZE,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            summary_json: false,
        }
    }
}

impl DashboardConfig {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    pub fn artifact_path(&self, artifact: Artifact) -> PathBuf {
        self.output_dir.join(artifact.file_name())
    }

    pub fn page_path(&self) -> PathBuf {
        self.output_dir.join(PAGE_FILE_NAME)
    }

    pub fn font_path(&self) -> Option<&Path> {
        self.font_path.as_deref()
    }
}
