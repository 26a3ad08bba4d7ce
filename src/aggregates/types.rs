//! Data types produced by the aggregation step and consumed by the chart builders.

use serde::Serialize;

use crate::aggregates::band::RatingBand;

/// Number of rows carrying one category value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Customer rating statistics for one shipment mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingRange {
    pub mode: String,
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl RatingRange {
    pub fn band(&self) -> RatingBand {
        RatingBand::from_mean(self.mean)
    }
}

/// One histogram bin. `end` is exclusive except for the last bin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}
