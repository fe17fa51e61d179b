//! Formatting helpers for presenting quantities.

/// Group thousands with a thin separator: `12345` -> `12 345`.
pub fn format_quantity(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{202f}');
        }
        out.push(ch);
    }
    out
}

/// Compact axis label: `1500` -> `1.5k`, `1250` -> `1.25k`.
pub fn format_tick(value: f64) -> String {
    if value.abs() >= 1000.0 {
        let scaled = format!("{:.3}", value / 1000.0);
        let trimmed = scaled.trim_end_matches('0').trim_end_matches('.');
        format!("{trimmed}k")
    } else {
        format!("{value:.0}")
    }
}
