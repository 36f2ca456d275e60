//! Ledger entry model
//!
//! An entry is a single income or expense record. The serialized field names
//! (`type`, decimal `amount`, ISO `date`) match the stored JSON format, so a
//! store written by an earlier frontend loads unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::EntryId;
use super::money::Money;

/// Whether an entry adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money coming in
    #[default]
    Income,
    /// Money going out
    Expense,
}

impl EntryKind {
    /// Check if this is an income entry
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    /// The other kind (used by the form's type toggle)
    pub fn toggled(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("unknown entry kind: {}", other)),
        }
    }
}

/// The validated field values of an entry, without its identity
///
/// Produced by form validation; consumed by the store to create a new entry
/// or overwrite an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFields {
    pub kind: EntryKind,
    pub description: String,
    pub amount: Money,
    pub date: NaiveDate,
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier
    pub id: EntryId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// What the money was for
    pub description: String,

    /// Amount, always positive; the kind carries the sign
    pub amount: Money,

    /// Entry date
    pub date: NaiveDate,
}

impl Entry {
    /// Create a new entry with a freshly generated id
    pub fn new(fields: EntryFields) -> Self {
        Self {
            id: EntryId::generate(),
            kind: fields.kind,
            description: fields.description,
            amount: fields.amount,
            date: fields.date,
        }
    }

    /// Overwrite the entry's fields, keeping its id
    pub fn apply(&mut self, fields: EntryFields) {
        self.kind = fields.kind;
        self.description = fields.description;
        self.amount = fields.amount;
        self.date = fields.date;
    }

    /// The amount with its sign: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            EntryKind::Income => self.amount,
            EntryKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount()
        )
    }
}
