//! CSV loader for the shipment dataset.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{DashboardError, Result};

pub const WAREHOUSE_BLOCK: &str = "Warehouse_block";
pub const MODE_OF_SHIPMENT: &str = "Mode_of_Shipment";
pub const CUSTOMER_RATING: &str = "Customer_rating";
pub const WEIGHT_IN_GMS: &str = "Weight_in_gms";

/// Shipment records held in memory as header-addressed string rows.
///
/// The table is never mutated after loading; chart builders borrow it and
/// pull the columns they need.
#[derive(Debug, Clone)]
pub struct ShipmentTable {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl ShipmentTable {
    /// Reads a comma-delimited file with a header row.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Read`] if the file cannot be opened and
    /// [`DashboardError::Parse`] if a record is malformed.
    #[tracing::instrument(fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| DashboardError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, path)
    }

    /// Parses CSV content from any reader. `origin` is only used to label errors.
    pub fn from_reader<R: Read>(reader: R, origin: &Path) -> Result<Self> {
        let parse_err = |source| DashboardError::Parse {
            path: origin.to_path_buf(),
            source,
        };

        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let headers = rdr.headers().map_err(parse_err)?.clone();

        let mut records = Vec::new();
        for result in rdr.records() {
            records.push(result.map_err(parse_err)?);
        }

        debug!(
            columns = headers.len(),
            rows = records.len(),
            "Shipment table loaded"
        );

        Ok(Self { headers, records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.iter()
    }

    fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DashboardError::MissingColumn {
                column: name.to_string(),
            })
    }

    /// Returns every value of a column as text, in row order.
    pub fn text_column(&self, name: &str) -> Result<Vec<&str>> {
        let index = self.column_index(name)?;
        Ok(self
            .records
            .iter()
            .map(|record| record.get(index).unwrap_or(""))
            .collect())
    }

    /// Returns every value of a column parsed as `f64`.
    ///
    /// # Errors
    ///
    /// [`DashboardError::InvalidValue`] names the first cell that is not a
    /// finite number, with its 1-based data line. `NaN` and infinities are
    /// rejected here because no chart can place them.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        self.text_column(name)?
            .into_iter()
            .enumerate()
            .map(|(i, raw)| {
                raw.trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| DashboardError::InvalidValue {
                        column: name.to_string(),
                        line: i + 1,
                        value: raw.to_string(),
                    })
            })
            .collect()
    }

    /// Returns `(category, value)` pairs from a text column and a numeric column.
    pub fn paired_columns(&self, category: &str, value: &str) -> Result<Vec<(&str, f64)>> {
        let categories = self.text_column(category)?;
        let values = self.numeric_column(value)?;
        Ok(categories.into_iter().zip(values).collect())
    }
}
