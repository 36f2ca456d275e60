//! Read-side projections of the ledger
//!
//! Filters, totals, and the snapshots renderers consume. Everything here is
//! pure: slices of entries in, values out.

pub mod filter;
pub mod snapshot;
pub mod summary;

pub use filter::EntryFilter;
pub use snapshot::Snapshot;
pub use summary::Totals;
