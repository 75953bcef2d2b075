//! Common helper functions for output formatting.

use owo_colors::OwoColorize;
use showroom_catalog::filter::ActiveFilter;
use showroom_catalog::TagValue;

/// Formats an amount as Philippine pesos, e.g. `₱100,000.00`.
pub fn format_php(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}₱{grouped}.{fraction:02}")
}

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Returns `noun` pluralized for `count`.
pub fn pluralize(noun: &str, count: usize) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

/// Formats the results line, e.g. "Showing 3 motorcycles".
pub fn format_summary(count: usize, noun: &str) -> String {
    format!("Showing {count} {}", pluralize(noun, count))
}

/// Formats the active filter tags, e.g. "[brand: honda] [price-range: Under ₱100k]".
pub fn format_filter_tags(filters: &[ActiveFilter], use_colors: bool) -> String {
    filters
        .iter()
        .map(|f| {
            let tag = format!("[{}: {}]", f.slot, f.label);
            if use_colors {
                tag.cyan().to_string()
            } else {
                tag
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a tag value for display.
pub fn format_tag_value(value: &TagValue) -> String {
    match value {
        TagValue::Flag(true) => "yes".to_string(),
        TagValue::Flag(false) => "no".to_string(),
        other => other.as_text().into_owned(),
    }
}
