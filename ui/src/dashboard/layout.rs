//! SVG geometry for the grouped bar chart.
//!
//! Pure functions over month rows; the `SalesChart` component only draws what
//! comes out of [`chart_layout`].

use crate::core::{format, ChartGeometry, MonthRow};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

/// Horizontal slot for one month; the hover target for the tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBand {
    pub row_index: usize,
    pub month: String,
    pub x: f64,
    pub width: f64,
}

impl CategoryBand {
    pub fn center(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub row_index: usize,
    pub product: String,
    pub value: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub plot: PlotArea,
    pub y_max: f64,
    pub ticks: Vec<AxisTick>,
    pub bands: Vec<CategoryBand>,
    pub bars: Vec<BarRect>,
}

pub fn chart_layout(rows: &[MonthRow], products: &[&str], geometry: &ChartGeometry) -> ChartLayout {
    let plot = PlotArea {
        x: geometry.margin_left + geometry.axis_width,
        y: geometry.margin_top,
        width: (geometry.width - geometry.margin_left - geometry.margin_right - geometry.axis_width)
            .max(0.0),
        height: (geometry.height - geometry.margin_top - geometry.margin_bottom).max(0.0),
    };

    let data_max = rows
        .iter()
        .flat_map(|row| products.iter().filter_map(|p| row.quantity(p)))
        .max()
        .unwrap_or(0);
    let tick_count = geometry.tick_count.max(2);
    let step = nice_step(f64::from(data_max), tick_count - 1);
    let y_max = step * (tick_count - 1) as f64;

    let scale_y = |value: f64| plot.bottom() - value / y_max * plot.height;

    let ticks = (0..tick_count)
        .map(|i| {
            let value = step * i as f64;
            AxisTick {
                value,
                y: scale_y(value),
                label: format::format_tick(value),
            }
        })
        .collect();

    let band_width = if rows.is_empty() {
        0.0
    } else {
        plot.width / rows.len() as f64
    };
    let bands: Vec<CategoryBand> = rows
        .iter()
        .enumerate()
        .map(|(row_index, row)| CategoryBand {
            row_index,
            month: row.month.clone(),
            x: plot.x + band_width * row_index as f64,
            width: band_width,
        })
        .collect();

    let group_width = band_width * (1.0 - geometry.category_gap);
    let group_offset = (band_width - group_width) / 2.0;
    let slots = products.len().max(1) as f64;
    let bar_width = ((group_width - geometry.bar_gap * (slots - 1.0)) / slots).max(0.0);

    let mut bars = Vec::with_capacity(rows.len() * products.len());
    for (band, row) in bands.iter().zip(rows) {
        for (slot, product) in products.iter().enumerate() {
            let Some(value) = row.quantity(product) else {
                continue;
            };
            let height = f64::from(value) / y_max * plot.height;
            bars.push(BarRect {
                row_index: band.row_index,
                product: product.to_string(),
                value,
                x: band.x + group_offset + slot as f64 * (bar_width + geometry.bar_gap),
                y: plot.bottom() - height,
                width: bar_width,
                height,
            });
        }
    }

    ChartLayout {
        plot,
        y_max,
        ticks,
        bands,
        bars,
    }
}

/// Round `max / intervals` up to 1, 2, 5 or 10 times a power of ten.
/// Quantities are whole units, so the step never drops below 1.
fn nice_step(max: f64, intervals: usize) -> f64 {
    if max <= 0.0 || intervals == 0 {
        return 1.0;
    }
    let raw = max / intervals as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    (nice * magnitude).max(1.0)
}

/// Rounded-top bar path (radius on the top corners only).
pub fn bar_path(bar: &BarRect, radius: f64) -> String {
    let r = radius.min(bar.width / 2.0).min(bar.height).max(0.0);
    let (x, y, w, h) = (bar.x, bar.y, bar.width, bar.height);
    format!(
        "M{x:.2},{b:.2} V{top:.2} Q{x:.2},{y:.2} {xr:.2},{y:.2} H{xw_r:.2} Q{xw:.2},{y:.2} {xw:.2},{top:.2} V{b:.2} Z",
        b = y + h,
        top = y + r,
        xr = x + r,
        xw_r = x + w - r,
        xw = x + w,
    )
}
