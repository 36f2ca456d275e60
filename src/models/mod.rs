//! Core data models for cashflow-cli
//!
//! This module contains the data structures that represent the ledger
//! domain: entries, amounts, and identifiers.

pub mod entry;
pub mod ids;
pub mod money;

pub use entry::{Entry, EntryFields, EntryKind};
pub use ids::EntryId;
pub use money::{Money, MoneyParseError};
