//! String formatting utilities for UI rendering.

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Sanitize a string for one tab-separated output cell.
///
/// Newlines and tabs become spaces; carriage returns are dropped.
pub fn single_line(s: &str) -> String {
    s.replace('\r', "").replace(['\n', '\t'], " ")
}

/// Format a number with two decimals and comma thousands separators.
///
/// `1234.5` becomes `"1,234.50"`. The sign is kept on the left.
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits = whole.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // Values that round to zero never carry a sign.
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}

/// Format a monetary amount with the configured currency symbol.
///
/// Negative amounts put the sign before the symbol: `-₹50.00`.
pub fn format_amount(value: f64, symbol: &str) -> String {
    let number = format_number(value);
    match number.strip_prefix('-') {
        Some(magnitude) => format!("-{}{}", symbol, magnitude),
        None => format!("{}{}", symbol, number),
    }
}
