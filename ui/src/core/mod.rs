//! Platform-agnostic dashboard logic: dataset, pivot, theme and presenter.

pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod presenter;
pub mod theme;
pub mod transform;

pub use config::{ChartGeometry, DashboardConfig};
pub use dataset::{MonthlyRecord, ProductSeries};
pub use error::{ConfigError, DatasetError, MalformedDatasetError};
pub use presenter::{ChartPresenter, HoverState, SeriesStyle, TooltipContent, TooltipEntry, UiState};
pub use theme::{Palette, ProductStyle, Theme};
pub use transform::{transform, MonthRow};
