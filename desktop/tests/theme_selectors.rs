#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The dashboard components in `ui/src/dashboard` emit BEM-style class names that
are only styled by the shared theme (`ui/assets/theme/main.css`). This test
embeds the theme and asserts the selectors those components rely on are still
there, so a CSS refactor that drops one fails here instead of silently
unstyling the packaged app.

When renaming a class:
    1. Update the component markup.
    2. Adjust REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Dashboard shell
    ".dashboard--light",
    ".dashboard--dark",
    ".dashboard__toggle",
    ".dashboard-card {",
    ".dashboard-card__title",
    ".dashboard-card__subtitle",
    ".dashboard-card__placeholder",
    ".dashboard-card__error",
    "@keyframes dashboard-card-enter",
    // Theme toggle
    ".theme-toggle {",
    ".theme-toggle--light",
    ".theme-toggle--dark",
    ".theme-toggle__knob",
    // Chart surface
    ".sales-chart__surface",
    ".sales-chart__svg",
    ".sales-chart__cursor",
    ".sales-chart__bar",
    // Tooltip
    ".sales-tooltip {",
    ".sales-tooltip--light",
    ".sales-tooltip--dark",
    ".sales-tooltip__month",
    ".sales-tooltip__entry",
    ".sales-tooltip__swatch",
    ".sales-tooltip__footer",
    ".sales-tooltip__total-value",
    // Legend
    ".chart-legend {",
    ".chart-legend__item--hidden",
    ".chart-legend__button",
    ".chart-legend__swatch",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars) – \
         did the file get truncated or path change?"
    );
}

#[test]
fn card_entrance_scales_up_to_full_size() {
    let start = THEME_CSS
        .find("@keyframes dashboard-card-enter")
        .expect("card entrance keyframes present");
    let block = &THEME_CSS[start..];
    let end = block.find("\n}\n").map(|i| i + 2).unwrap_or(block.len());
    let block = &block[..end];
    assert!(block.contains("scale(0.95)"), "entrance should start at 95%: {block}");
    assert!(block.contains("scale(1)"), "entrance should settle at 100%: {block}");
    assert!(THEME_CSS.contains("animation: dashboard-card-enter"));
}

#[test]
fn both_theme_variants_are_styled() {
    for variant in ["dark", "light"] {
        for block in ["dashboard", "sales-tooltip", "theme-toggle"] {
            let selector = format!(".{block}--{variant}");
            assert!(
                THEME_CSS.contains(&selector),
                "theme variant selector {selector} missing"
            );
        }
    }
}
