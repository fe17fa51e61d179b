mod chart;
pub use chart::SalesChart;

mod tooltip;
pub use tooltip::SalesTooltip;

mod legend;
pub use legend::ChartLegend;

mod theme_toggle;
pub use theme_toggle::ThemeToggle;

pub mod layout;

use crate::core::{dataset, transform, DatasetError, MonthRow};

/// Rows for the chart, or the reason they couldn't be produced.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub rows: Vec<MonthRow>,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn load() -> Self {
        Self::from_result(load_rows())
    }

    pub fn from_json(raw: &str) -> Self {
        Self::from_result(
            dataset::parse(raw).and_then(|series| transform(&series).map_err(DatasetError::from)),
        )
    }

    fn from_result(result: Result<Vec<MonthRow>, DatasetError>) -> Self {
        match result {
            Ok(rows) => Self { rows, error: None },
            Err(err) => {
                tracing::warn!(%err, "sales dataset rejected");
                Self {
                    rows: Vec::new(),
                    error: Some(err.to_string()),
                }
            }
        }
    }
}

fn load_rows() -> Result<Vec<MonthRow>, DatasetError> {
    let series = dataset::load_embedded()?;
    Ok(transform(&series)?)
}
