//! Analysis-run orchestration for the funnel-analytics system.
//!
//! This crate is the surface the presentation layer calls:
//! - One-shot analysis runs (ingest, KPIs, correlation, chart specs)
//! - User-facing value formatting (currency, percentage, counts)

pub mod analyzer;
pub mod format;

pub use analyzer::{run_analysis, AnalysisReport};
pub use format::{format_count, format_currency, format_percent, kpi_rows};
