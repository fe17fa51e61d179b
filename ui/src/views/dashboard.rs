use dioxus::prelude::*;

use crate::core::{ChartPresenter, DashboardConfig, UiState};
use crate::dashboard::{DashboardState, SalesChart, ThemeToggle};

#[component]
pub fn Dashboard() -> Element {
    // Subscribe to global language code (if provided) so this view re-renders
    // when the user switches language from the navbar.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let config = use_hook(DashboardConfig::load_user);
    let state = use_hook(DashboardState::load);

    let presenter = use_signal({
        let rows = state.rows.clone();
        let palette = config.palette.clone();
        let theme = config.default_theme;
        move || ChartPresenter::new(rows, palette, UiState::with_theme(theme))
    });

    let theme_class = presenter.read().state().theme.css_class();
    let geometry = config.chart;

    rsx! {
        // Hidden marker node retains reactive dependency on language signal.
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-dashboard dashboard {theme_class}",
            div { class: "dashboard__toggle",
                ThemeToggle { presenter }
            }

            article { class: "dashboard-card",
                div { class: "dashboard-card__header",
                    h1 { class: "dashboard-card__title", "📊 " {crate::t!("dashboard-title")} }
                    p { class: "dashboard-card__subtitle", "🎯 " {crate::t!("dashboard-subtitle")} }
                }

                if let Some(err) = state.error.as_ref() {
                    div { class: "dashboard-card__error", role: "alert",
                        p { class: "dashboard-card__error-title", "⚠️ " {crate::t!("dashboard-error-title")} }
                        p { class: "dashboard-card__error-detail", "{err}" }
                    }
                } else if state.rows.is_empty() {
                    p { class: "dashboard-card__placeholder", {crate::t!("dashboard-empty")} }
                } else {
                    SalesChart { presenter, geometry }
                }
            }
        }
    }
}
