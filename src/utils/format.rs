//! Format - Formatting Utilities

use chrono::NaiveDate;

/// Format a date the way the admin pages show it (`6/15/2025`)
pub fn format_short_date(date: &NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Format a number with a thousands separator
pub fn format_number(n: i64, separator: char) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        result.push('-');
    }

    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }

    result
}

/// Format an amount in rupiah (`Rp 450.000`)
pub fn format_rupiah(amount: i64) -> String {
    format!("Rp {}", format_number(amount, '.'))
}

/// Upper-case the first character (`processing` -> `Processing`)
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
