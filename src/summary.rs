use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::aggregates::band::RatingBand;
use crate::aggregates::types::{CategoryCount, HistogramBin, RatingRange};

/// Everything the four charts were drawn from, for one pipeline run.
#[derive(Debug, Default, Serialize)]
pub struct DashboardSummary {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub row_count: usize,

    pub warehouse_counts: Vec<CategoryCount>,
    pub mode_counts: Vec<CategoryCount>,
    pub rating_ranges: Vec<RatingRange>,
    pub weight_bins: Vec<HistogramBin>,
}

impl DashboardSummary {
    pub fn new(source: &str, row_count: usize) -> Self {
        DashboardSummary {
            generated_at: Utc::now(),
            source: source.to_string(),
            row_count,
            ..Default::default()
        }
    }

    /// `part` as a percentage of `total`; 0.0 when `total` is zero.
    pub fn pct(part: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            (part as f64 / total as f64) * 100.0
        }
    }

    /// The busiest warehouse block and its share of all shipments.
    pub fn top_warehouse(&self) -> Option<(&str, f64)> {
        self.warehouse_counts
            .first()
            .map(|c| (c.category.as_str(), Self::pct(c.count, self.row_count)))
    }

    pub fn modes_below_threshold(&self) -> Vec<&str> {
        self.rating_ranges
            .iter()
            .filter(|r| r.band() == RatingBand::BelowThreshold)
            .map(|r| r.mode.as_str())
            .collect()
    }
}
