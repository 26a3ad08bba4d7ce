pub mod aggregates;
pub mod charts;
pub mod config;
pub mod error;
pub mod fonts;
pub mod output;
pub mod page;
pub mod pipeline;
pub mod summary;
pub mod table;

pub use config::DashboardConfig;
pub use error::DashboardError;
pub use pipeline::{DashboardReport, run};
