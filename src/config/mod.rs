//! Configuration module for cashflow-cli
//!
//! This module provides configuration management including:
//! - Platform path resolution with an env override
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CashflowPaths;
pub use settings::Settings;
