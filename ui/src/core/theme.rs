//! Light/dark theme and the per-product colour palette.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// CSS modifier applied to the dashboard root, e.g. `dashboard--dark`.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "dashboard--light",
            Theme::Dark => "dashboard--dark",
        }
    }

    /// Colours for everything on the chart surface that isn't a series bar.
    pub fn chrome(self) -> ChromeColors {
        match self {
            Theme::Light => ChromeColors {
                grid: "#e5e7eb",
                axis: "#374151",
                cursor: "rgba(0, 0, 0, 0.1)",
                total_accent: "#6366f1",
            },
            Theme::Dark => ChromeColors {
                grid: "#374151",
                axis: "#d1d5db",
                cursor: "rgba(0, 0, 0, 0.1)",
                total_accent: "#6366f1",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeColors {
    pub grid: &'static str,
    pub axis: &'static str,
    pub cursor: &'static str,
    pub total_accent: &'static str,
}

/// Fixed colours and emoji for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductStyle {
    pub product: String,
    pub emoji: String,
    pub light: String,
    pub dark: String,
}

impl ProductStyle {
    pub fn new(product: &str, emoji: &str, light: &str, dark: &str) -> Self {
        Self {
            product: product.to_string(),
            emoji: emoji.to_string(),
            light: light.to_string(),
            dark: dark.to_string(),
        }
    }

    pub fn color(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub products: Vec<ProductStyle>,
    /// Used for any product without its own entry.
    pub fallback: ProductStyle,
    /// Opacity of the series that are not hovered while another one is.
    pub dimmed_opacity: f32,
}

impl Palette {
    pub fn entry(&self, product: &str) -> &ProductStyle {
        self.products
            .iter()
            .find(|style| style.product == product)
            .unwrap_or(&self.fallback)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            products: vec![
                ProductStyle::new("Refrigerante", "🥤", "#6366f1", "#818cf8"),
                ProductStyle::new("Suco", "🧃", "#10b981", "#34d399"),
                ProductStyle::new("Salgadinho", "🍿", "#f59e0b", "#fbbf24"),
            ],
            fallback: ProductStyle::new("", "📦", "#6b7280", "#9ca3af"),
            dimmed_opacity: 0.6,
        }
    }
}
