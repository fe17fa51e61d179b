//! Pivot per-product monthly series into per-month rows for grouped bars.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::dataset::ProductSeries;
use super::error::MalformedDatasetError;

/// One month's quantities across every product, in series order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRow {
    pub month: String,
    quantities: Vec<(String, u32)>,
}

impl MonthRow {
    pub fn new(month: impl Into<String>, quantities: Vec<(String, u32)>) -> Self {
        Self {
            month: month.into(),
            quantities,
        }
    }

    pub fn quantity(&self, product: &str) -> Option<u32> {
        self.quantities
            .iter()
            .find(|(name, _)| name == product)
            .map(|(_, qty)| *qty)
    }

    pub fn quantities(&self) -> &[(String, u32)] {
        &self.quantities
    }

    pub fn products(&self) -> impl Iterator<Item = &str> {
        self.quantities.iter().map(|(name, _)| name.as_str())
    }
}

// Flat shape: { "month": "Jan", "Refrigerante": 10, ... }
impl Serialize for MonthRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.quantities.len() + 1))?;
        map.serialize_entry("month", &self.month)?;
        for (name, qty) in &self.quantities {
            map.serialize_entry(name, qty)?;
        }
        map.end()
    }
}

/// Build one row per month index. Row `i` takes its label from the first series
/// and one quantity from every series at that same index.
///
/// Every series must have the same length and the same month label at each
/// index, and product names must be unique.
pub fn transform(series: &[ProductSeries]) -> Result<Vec<MonthRow>, MalformedDatasetError> {
    let first = series.first().ok_or(MalformedDatasetError::Empty)?;
    let months = first.len();

    for (pos, current) in series.iter().enumerate() {
        if series[..pos].iter().any(|prev| prev.name == current.name) {
            return Err(MalformedDatasetError::DuplicateProduct {
                product: current.name.clone(),
            });
        }
        if current.len() != months {
            return Err(MalformedDatasetError::LengthMismatch {
                product: current.name.clone(),
                expected: months,
                found: current.len(),
            });
        }
        for (index, (reference, record)) in first
            .monthly_records
            .iter()
            .zip(&current.monthly_records)
            .enumerate()
        {
            if reference.month != record.month {
                return Err(MalformedDatasetError::MonthMismatch {
                    index,
                    product: current.name.clone(),
                    expected: reference.month.clone(),
                    found: record.month.clone(),
                });
            }
        }
    }

    let rows: Vec<MonthRow> = (0..months)
        .map(|index| {
            let quantities = series
                .iter()
                .map(|s| (s.name.clone(), s.monthly_records[index].quantity))
                .collect();
            MonthRow::new(first.monthly_records[index].month.clone(), quantities)
        })
        .collect();

    tracing::info!(
        products = series.len(),
        months = rows.len(),
        "pivoted sales dataset"
    );
    Ok(rows)
}
