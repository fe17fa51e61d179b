use dioxus::prelude::*;

use crate::core::ChartPresenter;
use crate::t;

#[component]
pub fn ThemeToggle(presenter: Signal<ChartPresenter>) -> Element {
    let mut presenter = presenter;
    let dark = presenter.read().theme().is_dark();
    let (modifier, knob, label) = if dark {
        ("theme-toggle--dark", "🌙", t!("theme-toggle-to-light"))
    } else {
        ("theme-toggle--light", "☀️", t!("theme-toggle-to-dark"))
    };

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle {modifier}",
            aria_label: "{label}",
            title: "{label}",
            onclick: move |_| presenter.with_mut(|p| p.toggle_theme()),
            span { class: "theme-toggle__icon theme-toggle__icon--sun", aria_hidden: "true", "☀️" }
            span { class: "theme-toggle__knob", "{knob}" }
            span { class: "theme-toggle__icon theme-toggle__icon--moon", aria_hidden: "true", "🌙" }
        }
    }
}
