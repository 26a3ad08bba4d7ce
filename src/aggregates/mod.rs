//! Descriptive aggregation over the shipment table.
//!
//! Frequency counts, per-group rating ranges, and histogram binning. The
//! chart builders render these results; the pipeline also collects them
//! into a [`crate::summary::DashboardSummary`].

pub mod aggregate;
pub mod band;
pub mod types;
pub mod utility;
