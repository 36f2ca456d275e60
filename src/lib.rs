//! cashflow - a terminal-based personal income and expense tracker
//!
//! The ledger is an ordered collection of income/expense entries persisted
//! as JSON under a single storage key. Mutations go through the entry
//! store, which writes through to disk; views are pure projections
//! (filter, totals, snapshot) consumed by the CLI and TUI frontends.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: custom error types
//! - `models`: entries, amounts, identifiers
//! - `storage`: key-value persistence and the entry store
//! - `services`: input validation and the add/edit session
//! - `view`: filters, totals, render snapshots
//! - `display`: terminal formatting
//! - `cli`: command handlers
//! - `tui`: interactive interface

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;
pub mod view;

pub use error::{CashflowError, CashflowResult};
