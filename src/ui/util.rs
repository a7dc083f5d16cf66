use rust_decimal::Decimal;

use crate::models::round_display;

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"$1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let rounded = round_display(val, 2);
    let abs = rounded.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if rounded < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// `12.3456` → `"12.35%"`
pub(crate) fn format_percent(val: Decimal) -> String {
    format!("{:.2}%", round_display(val, 2))
}

/// One-decimal share label for chart slices, e.g. `"33.3%"`.
pub(crate) fn format_share(val: Decimal) -> String {
    format!("{:.1}%", round_display(val, 1))
}

/// Signed percentage-point difference, e.g. `"+6.00 pts"`.
pub(crate) fn format_points(val: Decimal) -> String {
    let val = round_display(val, 2);
    if val > Decimal::ZERO {
        format!("+{val:.2} pts")
    } else {
        format!("{val:.2} pts")
    }
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is guaranteed to be at most `max` characters (counting "…" as one).
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Parse a form or flag value as a non-negative amount. Accepts `$` and `,`.
pub(crate) fn parse_amount(s: &str) -> anyhow::Result<Decimal> {
    let cleaned: String = s.trim().chars().filter(|c| !matches!(c, '$' | ',')).collect();
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let value: Decimal = cleaned
        .parse()
        .map_err(|_| anyhow::anyhow!("Not a number: {s}"))?;
    if value < Decimal::ZERO {
        anyhow::bail!("Amount cannot be negative: {s}");
    }
    Ok(value)
}
