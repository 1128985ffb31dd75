//! Read-only card for a pushed ticker route
//!
//! Shows the document that produced the route. Quotes, charts and any
//! further fetching belong to a real detail screen and are not done here.

pub mod detail_render;

/// Compact market capitalization, e.g. `2.89e12` becomes `$2.89T`
pub fn format_market_cap(market_cap: f64) -> String {
    const UNITS: [(f64, &str); 3] = [(1e12, "T"), (1e9, "B"), (1e6, "M")];

    if !market_cap.is_finite() || market_cap <= 0.0 {
        return "n/a".to_string();
    }

    // Unit is picked after rounding to cents so 999.995B reads $1.00T
    for (scale, suffix) in UNITS {
        let scaled = (market_cap / scale * 100.0).round() / 100.0;
        if scaled >= 1.0 {
            return format!("${:.2}{}", scaled, suffix);
        }
    }
    format!("${:.0}", market_cap)
}
