use dioxus::prelude::*;

use crate::core::{ChartGeometry, ChartPresenter, SeriesStyle, Theme};
use crate::dashboard::layout::{bar_path, chart_layout, BarRect, CategoryBand};
use crate::dashboard::{ChartLegend, SalesTooltip};
use crate::t;

const BAR_RADIUS: f64 = 4.0;

#[component]
pub fn SalesChart(presenter: Signal<ChartPresenter>, geometry: ChartGeometry) -> Element {
    let hidden = use_signal(Vec::<String>::new);
    let mut active_month = use_signal(|| Option::<usize>::None);

    let snapshot = presenter.read();
    let theme = snapshot.theme();
    let chrome = theme.chrome();
    let products = snapshot.products();
    let hidden_now = hidden();
    let visible: Vec<&str> = products
        .iter()
        .map(String::as_str)
        .filter(|product| !hidden_now.iter().any(|h| h == product))
        .collect();

    let layout = chart_layout(snapshot.rows(), &visible, &geometry);
    let active_band = active_month().and_then(|index| layout.bands.get(index).cloned());
    let tooltip = snapshot.tooltip_for(active_month().and_then(|i| snapshot.row_at(i)), &visible);
    let tooltip_left = active_band
        .as_ref()
        .map(|band| format!("{:.2}%", band.center() / geometry.width * 100.0))
        .unwrap_or_default();

    let styles: Vec<SeriesStyle> = layout
        .bars
        .iter()
        .map(|bar| snapshot.style_for(&bar.product))
        .collect();
    drop(snapshot);

    let view_box = format!("0 0 {} {}", geometry.width, geometry.height);
    let plot = layout.plot;
    let label_y = plot.bottom() + 20.0;
    let plot_right = plot.right();
    let axis_x = plot.x - 8.0;

    rsx! {
        div { class: "sales-chart",
            div { class: "sales-chart__surface",
                svg {
                    class: "sales-chart__svg",
                    view_box: "{view_box}",
                    preserve_aspect_ratio: "xMidYMid meet",
                    role: "img",
                    "aria-label": t!("chart-aria-label"),
                    onmouseleave: move |_| active_month.set(None),

                    for tick in layout.ticks.iter() {
                        g { key: "tick-{tick.value}",
                            line {
                                class: "sales-chart__grid",
                                x1: "{plot.x}",
                                x2: "{plot_right}",
                                y1: "{tick.y}",
                                y2: "{tick.y}",
                                stroke: chrome.grid,
                                stroke_dasharray: "3 3",
                                opacity: "0.7",
                            }
                            text {
                                class: "sales-chart__tick",
                                x: "{axis_x}",
                                y: "{tick.y}",
                                text_anchor: "end",
                                dominant_baseline: "middle",
                                fill: chrome.axis,
                                "{tick.label}"
                            }
                        }
                    }

                    if let Some(band) = active_band.as_ref() {
                        rect {
                            class: "sales-chart__cursor",
                            x: "{band.x}",
                            y: "{plot.y}",
                            width: "{band.width}",
                            height: "{plot.height}",
                            fill: chrome.cursor,
                        }
                    }

                    for band in layout.bands.iter() {
                        {render_band(band.clone(), plot.y, plot.height, label_y, theme, active_month)}
                    }

                    for (bar, style) in layout.bars.iter().zip(styles) {
                        {render_bar(bar.clone(), style, presenter, active_month)}
                    }
                }

                if let Some(content) = tooltip {
                    SalesTooltip { content, theme, left: tooltip_left }
                }
            }

            ChartLegend { presenter, hidden }
        }
    }
}

/// Transparent hit area for one month plus its axis label.
fn render_band(
    band: CategoryBand,
    plot_y: f64,
    plot_height: f64,
    label_y: f64,
    theme: Theme,
    mut active_month: Signal<Option<usize>>,
) -> Element {
    let index = band.row_index;
    let center = band.center();
    let axis = theme.chrome().axis;

    rsx! {
        g { class: "sales-chart__category",
            rect {
                class: "sales-chart__band",
                x: "{band.x}",
                y: "{plot_y}",
                width: "{band.width}",
                height: "{plot_height}",
                fill: "transparent",
                onmouseenter: move |_| active_month.set(Some(index)),
            }
            text {
                class: "sales-chart__month",
                x: "{center}",
                y: "{label_y}",
                text_anchor: "middle",
                fill: axis,
                "{band.month}"
            }
        }
    }
}

fn render_bar(
    bar: BarRect,
    style: SeriesStyle,
    mut presenter: Signal<ChartPresenter>,
    mut active_month: Signal<Option<usize>>,
) -> Element {
    let d = bar_path(&bar, BAR_RADIUS);
    let BarRect {
        row_index,
        product,
        value,
        ..
    } = bar;
    let label = t!("chart-bar-label", product = product.as_str(), quantity = value);

    rsx! {
        path {
            class: "sales-chart__bar",
            "aria-label": "{label}",
            d: "{d}",
            fill: "{style.color}",
            opacity: "{style.opacity}",
            onmouseenter: move |_| {
                presenter.with_mut(|p| p.pointer_enter(&product));
                active_month.set(Some(row_index));
            },
            onmouseleave: move |_| presenter.with_mut(|p| p.pointer_leave()),
        }
    }
}
