//! Metric computation for the funnel-analytics system.
//!
//! This crate handles:
//! - KPI aggregation (sums and guarded ratios)
//! - Pearson correlation between contacts and sales
//! - Linear trend fitting for the scatter overlay
//! - Chart specification building for the presentation layer

pub mod charts;
pub mod correlation;
pub mod kpi;
pub mod trend;

pub use charts::{conversion_scatter, spend_efficiency, BubbleChartSpec, ScatterChartSpec};
pub use correlation::pearson;
pub use kpi::compute_kpis;
pub use trend::TrendLine;
