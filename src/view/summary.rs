//! Ledger totals
//!
//! Pure aggregation over a slice of entries; no storage access.

use crate::models::{Entry, Money};

/// Total income, total expense, and the net balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of all income amounts
    pub income: Money,
    /// Sum of all expense amounts (as a positive magnitude)
    pub expense: Money,
    /// income - expense; negative when spending exceeds income
    pub balance: Money,
}

impl Totals {
    /// Compute totals over the given entries
    pub fn compute(entries: &[Entry]) -> Self {
        let income: Money = entries
            .iter()
            .filter(|e| e.kind.is_income())
            .map(|e| e.amount)
            .sum();
        let expense: Money = entries
            .iter()
            .filter(|e| !e.kind.is_income())
            .map(|e| e.amount)
            .sum();

        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}
