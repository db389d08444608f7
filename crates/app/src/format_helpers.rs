//! Display formatting for dates and amounts.

use chrono::NaiveDate;

/// "2026-03-05" or "2026-03-05T10:00:00Z" as "05 Mar 2026". Empty input renders "-".
///
/// Unparseable input is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "-".to_string();
    }
    raw.get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn format_optional_date(raw: Option<&str>) -> String {
    raw.map(format_date).unwrap_or_else(|| "-".to_string())
}

/// Rupee amount with Indian digit grouping: 1250000.0 -> "₹12,50,000".
pub fn format_rupees(amount: f64) -> String {
    let whole = amount.abs().round() as u64;
    let digits = whole.to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts: Vec<String> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (a, b) = rest.split_at(rest.len() - 2);
            parts.push(b.to_string());
            rest = a;
        }
        parts.push(rest.to_string());
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}₹{grouped}")
}
