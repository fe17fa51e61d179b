//! Dashboard configuration: palette, chart geometry and the starting theme.
//!
//! Every field has a default, so a config file only needs the keys it changes:
//! ```json
//! { "default_theme": "dark", "palette": { "dimmed_opacity": 0.4 } }
//! ```
//! Desktop builds look for `config.json` in the platform config directory
//! (see [`DashboardConfig::load_user`]); web builds always use the defaults.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::theme::{Palette, Theme};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub default_theme: Theme,
    pub palette: Palette,
    pub chart: ChartGeometry,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_theme: Theme::Light,
            palette: Palette::default(),
            chart: ChartGeometry::default(),
        }
    }
}

/// Size of the SVG plot in user units, plus its inner margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    /// Width reserved for the y-axis tick labels.
    pub axis_width: f64,
    /// Fraction of each month band left empty around the bar group.
    pub category_gap: f64,
    /// Gap between bars of the same month, in user units.
    pub bar_gap: f64,
    pub tick_count: usize,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 420.0,
            margin_top: 10.0,
            margin_right: 10.0,
            margin_bottom: 40.0,
            margin_left: 10.0,
            axis_width: 40.0,
            category_gap: 0.15,
            bar_gap: 4.0,
            tick_count: 5,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let opacity = self.palette.dimmed_opacity;
        if !(0.0..=1.0).contains(&opacity) {
            return Err(ConfigError::Invalid(format!(
                "dimmed_opacity must be within 0..=1, got {opacity}"
            )));
        }

        let chart = &self.chart;
        let inner_w = chart.width - chart.margin_left - chart.margin_right - chart.axis_width;
        let inner_h = chart.height - chart.margin_top - chart.margin_bottom;
        if !(inner_w > 0.0 && inner_h > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "chart area collapses to {inner_w}x{inner_h}"
            )));
        }
        if !(0.0..1.0).contains(&chart.category_gap) {
            return Err(ConfigError::Invalid(format!(
                "category_gap must be within 0..1, got {}",
                chart.category_gap
            )));
        }
        if chart.bar_gap < 0.0 {
            return Err(ConfigError::Invalid("bar_gap can't be negative".into()));
        }
        if chart.tick_count < 2 {
            return Err(ConfigError::Invalid("tick_count must be at least 2".into()));
        }
        Ok(())
    }

    /// Load the user's config file if one exists, falling back to defaults on
    /// any problem (the failure is logged).
    pub fn load_user() -> Self {
        match Self::read_user_file() {
            Ok(Some(config)) => {
                tracing::info!("loaded dashboard config from user directory");
                config
            }
            Ok(None) => Self::default(),
            Err(err) => {
                tracing::warn!(%err, "ignoring dashboard config");
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn read_user_file() -> Result<Option<Self>, ConfigError> {
        let Some(dirs) = directories::ProjectDirs::from("com", "Salesboard", "Salesboard") else {
            return Ok(None);
        };
        let path = dirs.config_dir().join("config.json");
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path)?;
        Self::from_json(&raw).map(Some)
    }

    #[cfg(target_arch = "wasm32")]
    fn read_user_file() -> Result<Option<Self>, ConfigError> {
        Ok(None)
    }
}
