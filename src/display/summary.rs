//! Totals formatting for terminal output

use crate::config::Settings;
use crate::view::Totals;

use super::format::{format_amount, format_balance};

/// Format the three aggregate totals as an aligned block
pub fn format_totals(totals: &Totals, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str(&format!("Income:   {}\n", format_amount(totals.income, symbol)));
    output.push_str(&format!("Expense:  {}\n", format_amount(totals.expense, symbol)));
    output.push_str(&format!("Balance:  {}\n", format_balance(totals.balance, symbol)));

    output
}
