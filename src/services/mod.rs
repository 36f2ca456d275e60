//! Service layer for cashflow-cli
//!
//! Business logic on top of the storage layer: input validation and the
//! add/edit session state machine.

pub mod form;

pub use form::{EditSession, EntryInput, FormController, ValidationError};
