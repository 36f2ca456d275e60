//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod entries;

pub use entries::{
    handle_add, handle_delete, handle_edit, handle_list, handle_summary, FilterArg, KindArg,
};
