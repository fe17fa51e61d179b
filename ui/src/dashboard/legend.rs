use dioxus::prelude::*;

use crate::core::ChartPresenter;

/// Series legend. Clicking an item hides or shows that series; hidden series
/// drop out of the bars and of the tooltip total.
#[component]
pub fn ChartLegend(presenter: Signal<ChartPresenter>, hidden: Signal<Vec<String>>) -> Element {
    let snapshot = presenter.read();
    let hidden_now = hidden();
    let items: Vec<LegendItem> = snapshot
        .products()
        .into_iter()
        .map(|product| {
            let style = snapshot.style_for(&product);
            LegendItem {
                is_hidden: hidden_now.contains(&product),
                color: style.color,
                emoji: style.emoji,
                product,
            }
        })
        .collect();
    drop(snapshot);

    rsx! {
        ul { class: "chart-legend",
            for item in items.into_iter() {
                {render_item(item, hidden)}
            }
        }
    }
}

#[derive(Clone)]
struct LegendItem {
    product: String,
    emoji: String,
    color: String,
    is_hidden: bool,
}

fn render_item(item: LegendItem, mut hidden: Signal<Vec<String>>) -> Element {
    let LegendItem {
        product,
        emoji,
        color,
        is_hidden,
    } = item;
    let toggle_product = product.clone();
    let pressed = !is_hidden;

    rsx! {
        li {
            key: "{product}",
            class: format!(
                "chart-legend__item {}",
                if is_hidden { "chart-legend__item--hidden" } else { "" }
            ),
            button {
                r#type: "button",
                class: "chart-legend__button",
                aria_pressed: "{pressed}",
                onclick: move |_| {
                    hidden.with_mut(|list| {
                        if let Some(pos) = list.iter().position(|p| p == &toggle_product) {
                            list.remove(pos);
                        } else {
                            list.push(toggle_product.clone());
                        }
                    });
                },
                span { class: "chart-legend__swatch", style: "background-color: {color}" }
                span { class: "chart-legend__emoji", "{emoji}" }
                span { class: "chart-legend__label", "{product}" }
            }
        }
    }
}
