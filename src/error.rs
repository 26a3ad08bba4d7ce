//! Error type shared by every stage of the dashboard pipeline.

use std::path::PathBuf;

/// Boxed drawing failure raised by plotters while rendering a chart.
pub type RenderFailure = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The input file is missing or cannot be opened.
    #[error("cannot read input file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The delimited content is malformed (ragged rows, bad encoding).
    #[error("malformed CSV content in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("required column `{column}` is missing from the shipment table")]
    MissingColumn { column: String },

    /// A cell in a numeric column does not parse as a number.
    #[error("column `{column}` line {line}: `{value}` is not a number")]
    InvalidValue {
        column: String,
        line: usize,
        value: String,
    },

    #[error("cannot write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render chart {path}")]
    Render {
        path: PathBuf,
        #[source]
        source: RenderFailure,
    },
}

pub type Result<T> = std::result::Result<T, DashboardError>;
