//! Input dataset model: one quantity history per product.
//!
//! The bundled dataset lives in `assets/data/sales_data.json` and keeps the
//! field names of the upstream export (`produto`, `vendas`, `mes`, `quantidade`).

use serde::{Deserialize, Serialize};

use super::error::DatasetError;

const EMBEDDED_DATASET: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/data/sales_data.json"
));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    #[serde(rename = "mes")]
    pub month: String,
    #[serde(rename = "quantidade")]
    pub quantity: u32,
}

impl MonthlyRecord {
    pub fn new(month: impl Into<String>, quantity: u32) -> Self {
        Self {
            month: month.into(),
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSeries {
    #[serde(rename = "produto")]
    pub name: String,
    #[serde(rename = "vendas")]
    pub monthly_records: Vec<MonthlyRecord>,
}

impl ProductSeries {
    pub fn new(name: impl Into<String>, monthly_records: Vec<MonthlyRecord>) -> Self {
        Self {
            name: name.into(),
            monthly_records,
        }
    }

    pub fn len(&self) -> usize {
        self.monthly_records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_records.is_empty()
    }
}

/// Parse a dataset from its JSON representation. Alignment is not checked here;
/// that is the pivot's job.
pub fn parse(raw: &str) -> Result<Vec<ProductSeries>, DatasetError> {
    let series: Vec<ProductSeries> = serde_json::from_str(raw)?;
    tracing::debug!(products = series.len(), "parsed sales dataset");
    Ok(series)
}

/// The dataset compiled into the binary.
pub fn load_embedded() -> Result<Vec<ProductSeries>, DatasetError> {
    parse(EMBEDDED_DATASET)
}
