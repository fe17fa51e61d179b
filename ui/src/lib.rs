//! Shared UI crate for Salesboard. Data shaping, presentation state and the
//! dashboard views live here; platform crates only launch them.

use dioxus::prelude::*;

/// Shared theme stylesheet. Web links it; desktop inlines the same file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized brand header with locale switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}
