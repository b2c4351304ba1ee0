//! Data ingestion and normalization for the funnel-analytics system.
//!
//! This crate handles:
//! - Delimited input parsing (headerless, fixed column positions)
//! - Locale-aware currency cleaning of the spend column
//! - Numeric coercion of the contact and sale columns
//! - Row-level defect exclusion and ingestion statistics

pub mod clean;
pub mod loader;

pub use clean::{clean_currency, parse_count};
pub use loader::{load_table, LoadOutcome};
