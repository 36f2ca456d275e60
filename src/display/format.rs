//! Formatting primitives for amounts and dates
//!
//! Amounts render with the configured currency symbol and Indian digit
//! grouping (1,50,000.00), matching the locale the stored ledgers were
//! written for.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::models::{Entry, Money};

/// Symbol + grouped absolute value, two decimals: "₹1,50,000.00"
pub fn format_amount(amount: Money, symbol: &str) -> String {
    let abs = amount.abs();
    format!(
        "{}{}.{:02}",
        symbol,
        group_indian(&abs.units().to_string()),
        abs.cents_part()
    )
}

/// Balance with a leading sign when negative: "-₹1,500.00"
pub fn format_balance(amount: Money, symbol: &str) -> String {
    if amount.is_negative() {
        format!("-{}", format_amount(amount, symbol))
    } else {
        format_amount(amount, symbol)
    }
}

/// List-row amount carrying the entry kind's sign: "+₹500.00" / "-₹40.00"
pub fn format_entry_amount(entry: &Entry, symbol: &str) -> String {
    let sign = if entry.kind.is_income() { "+" } else { "-" };
    format!("{}{}", sign, format_amount(entry.amount, symbol))
}

/// Render a date with the configured strftime format
///
/// Falls back to ISO if the configured format string is malformed, since it
/// comes from a hand-editable settings file.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut items = StrftimeItems::new(format);
    if items.any(|item| matches!(item, Item::Error)) {
        return date.format("%Y-%m-%d").to_string();
    }
    date.format(format).to_string()
}

/// Indian digit grouping: last three digits, then pairs
/// ("150000" -> "1,50,000")
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut i = head.len();
    while i > 2 {
        groups.push(&head[i - 2..i]);
        i -= 2;
    }
    groups.push(&head[..i]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
