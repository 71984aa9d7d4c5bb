//! Human-readable number formatting.

/// Shown for a delta the API did not report.
pub const PLACEHOLDER: &str = "+0";

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a daily delta: `Some(1234567)` -> `"+1,234,567"`, `None` -> `"+0"`.
pub fn pretty_print_stat(stat: Option<u64>) -> String {
    match stat {
        Some(value) => format!("+{}", group_thousands(value)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Format a running total: `Some(1234567)` -> `"1,234,567"`, `None` -> `"0"`.
pub fn format_total(total: Option<u64>) -> String {
    group_thousands(total.unwrap_or(0))
}
