use dioxus::prelude::*;

use crate::core::{format, Theme, TooltipContent, TooltipEntry};
use crate::t;

/// Aggregated month tooltip: one line per rendered series and a running total.
/// `left` is the horizontal anchor as a CSS percentage of the chart width.
#[component]
pub fn SalesTooltip(content: TooltipContent, theme: Theme, left: String) -> Element {
    let modifier = if theme.is_dark() {
        "sales-tooltip--dark"
    } else {
        "sales-tooltip--light"
    };
    let total = format::format_quantity(content.total);
    let accent = theme.chrome().total_accent;

    rsx! {
        div {
            class: "sales-tooltip {modifier}",
            style: "left: {left}",
            role: "status",

            div { class: "sales-tooltip__header",
                h3 { class: "sales-tooltip__month", "📅 {content.month}" }
                div { class: "sales-tooltip__rule" }
            }

            ul { class: "sales-tooltip__entries",
                for entry in content.entries.iter() {
                    {render_entry(entry)}
                }
            }

            div { class: "sales-tooltip__footer",
                span { class: "sales-tooltip__total-label", "📊 " {t!("tooltip-total")} }
                span { class: "sales-tooltip__total-value", style: "color: {accent}", "{total}" }
            }
        }
    }
}

fn render_entry(entry: &TooltipEntry) -> Element {
    let value = entry
        .quantity
        .map(|qty| format::format_quantity(u64::from(qty)))
        .unwrap_or_else(|| "—".to_string());

    rsx! {
        li { key: "{entry.product}", class: "sales-tooltip__entry",
            span { class: "sales-tooltip__series",
                span { class: "sales-tooltip__emoji", "{entry.emoji}" }
                span { class: "sales-tooltip__swatch", style: "background-color: {entry.color}" }
                span { class: "sales-tooltip__product", style: "color: {entry.color}", "{entry.product}" }
            }
            span { class: "sales-tooltip__value", "{value}" }
        }
    }
}
