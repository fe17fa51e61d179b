//! Derived chart state: series styling, hover/theme transitions and tooltip content.
//!
//! `ChartPresenter` owns the pivoted rows and the session's `UiState`. Nothing is
//! cached: every `style_for`/`tooltip_for` call reads the current state, so output
//! always reflects the latest `set_theme`/`set_hovered_series`.

use super::theme::{Palette, Theme};
use super::transform::MonthRow;

/// Session-scoped interaction state. Passed in explicitly, never global.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub hovered_series: Option<String>,
}

impl UiState {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            hovered_series: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverState {
    Idle,
    Hovering(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStyle {
    pub color: String,
    pub emoji: String,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipEntry {
    pub product: String,
    pub emoji: String,
    pub color: String,
    /// `None` when the row has no value for this product.
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipContent {
    pub month: String,
    pub entries: Vec<TooltipEntry>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPresenter {
    rows: Vec<MonthRow>,
    palette: Palette,
    state: UiState,
}

impl ChartPresenter {
    pub fn new(rows: Vec<MonthRow>, palette: Palette, state: UiState) -> Self {
        Self {
            rows,
            palette,
            state,
        }
    }

    pub fn rows(&self) -> &[MonthRow] {
        &self.rows
    }

    pub fn row_at(&self, index: usize) -> Option<&MonthRow> {
        self.rows.get(index)
    }

    /// Product keys in series order, taken from the first row.
    pub fn products(&self) -> Vec<String> {
        self.rows
            .first()
            .map(|row| row.products().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn hovered_series(&self) -> Option<&str> {
        self.state.hovered_series.as_deref()
    }

    pub fn interaction(&self) -> (HoverState, Theme) {
        let hover = match &self.state.hovered_series {
            Some(product) => HoverState::Hovering(product.clone()),
            None => HoverState::Idle,
        };
        (hover, self.state.theme)
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.state.theme != theme {
            tracing::debug!(?theme, "theme changed");
        }
        self.state.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.state.theme.toggled());
    }

    pub fn set_hovered_series(&mut self, product: Option<&str>) {
        self.state.hovered_series = product.map(str::to_string);
    }

    pub fn pointer_enter(&mut self, product: &str) {
        self.set_hovered_series(Some(product));
    }

    pub fn pointer_leave(&mut self) {
        self.set_hovered_series(None);
    }

    pub fn style_for(&self, product: &str) -> SeriesStyle {
        let entry = self.palette.entry(product);
        let opacity = match self.hovered_series() {
            Some(hovered) if hovered != product => self.palette.dimmed_opacity,
            _ => 1.0,
        };
        SeriesStyle {
            color: entry.color(self.state.theme).to_string(),
            emoji: entry.emoji.clone(),
            opacity,
        }
    }

    /// Tooltip for one month restricted to the series currently rendered.
    /// Returns `None` (tooltip inactive) without a row or without active series.
    pub fn tooltip_for(&self, row: Option<&MonthRow>, active: &[&str]) -> Option<TooltipContent> {
        let row = row?;
        if active.is_empty() {
            return None;
        }

        let entries: Vec<TooltipEntry> = active
            .iter()
            .map(|product| {
                let entry = self.palette.entry(product);
                TooltipEntry {
                    product: product.to_string(),
                    emoji: entry.emoji.clone(),
                    color: entry.color(self.state.theme).to_string(),
                    quantity: row.quantity(product),
                }
            })
            .collect();

        let total = entries
            .iter()
            .filter_map(|entry| entry.quantity)
            .map(u64::from)
            .sum();

        Some(TooltipContent {
            month: row.month.clone(),
            entries,
            total,
        })
    }
}
