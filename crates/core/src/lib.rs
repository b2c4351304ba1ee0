//! Core types and configuration for the funnel-analytics system.
//!
//! This crate provides shared types used across all other crates:
//! - Normalized sales data types (records, table, KPI set)
//! - Configuration structures (column layout, currency format)
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::{ColumnLayout, CurrencyFormat, IngestConfig};
pub use error::{Error, Result};
pub use types::*;
