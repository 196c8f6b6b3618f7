//! Price rendering and Telegram HTML helpers.

/// Escape HTML special characters for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render an exchange rate for display.
///
/// `None` is an undefined rate (failed fetch, degenerate arithmetic) and
/// renders as `N/A`. Brackets are chosen with literal `>=` comparisons, so
/// exactly 1,000 and exactly 1,000,000 belong to the upper bracket.
pub fn format_price(rate: Option<f64>) -> String {
    let Some(rate) = rate else {
        return "N/A".to_string();
    };

    if rate >= 1_000_000.0 {
        format!("{:.2}M", rate / 1_000_000.0)
    } else if rate >= 1_000.0 {
        group_thousands(rate.round() as u64)
    } else {
        format!("{rate:.4}")
    }
}

/// `12346` -> `"12,346"`. std has no locale-aware number formatter.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
