//! One-shot analysis runs.
//!
//! An analysis run is a pure request/response transformation: raw bytes in,
//! a complete report out. Each run owns its own table and KPI set, so
//! concurrent callers never share state.

use std::io::Read;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use funnel_core::{DataWarning, IngestConfig, IngestStats, KpiSet, NormalizedTable, Result};
use funnel_ingestion::load_table;
use funnel_metrics::{
    compute_kpis, conversion_scatter, pearson, spend_efficiency, BubbleChartSpec, ScatterChartSpec,
};

/// Everything the presentation layer needs from one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// When this report was produced.
    pub generated_at: DateTime<Utc>,
    /// Ingestion counters (rows read, kept, dropped).
    pub stats: IngestStats,
    /// The normalized table, passed through for tabular display.
    pub table: NormalizedTable,
    /// Aggregate performance metrics.
    pub kpis: KpiSet,
    /// Pearson correlation between contacts and sales; `None` when
    /// undefined (fewer than two rows or a constant column).
    pub correlation: Option<f64>,
    /// Contacts-vs-sales scatter with trend overlay.
    pub conversion_chart: ScatterChartSpec,
    /// Spend-efficiency bubble chart.
    pub efficiency_chart: BubbleChartSpec,
    /// Non-fatal data quality condition, if any.
    pub warning: Option<DataWarning>,
}

/// Run one full analysis over raw delimited input.
///
/// Fails only on the fatal schema condition (or an unreadable source);
/// row-level defects reduce the record count instead. An input that cleans
/// down to zero rows still produces a report, flagged with
/// [`DataWarning::EmptyAfterCleaning`].
pub fn run_analysis(reader: impl Read, config: &IngestConfig) -> Result<AnalysisReport> {
    let outcome = load_table(reader, config)?;
    let table = outcome.table;

    let warning = if table.is_empty() {
        warn!("normalized table is empty after cleaning; check columns 3, 22 and 24 of the input");
        Some(DataWarning::EmptyAfterCleaning)
    } else {
        None
    };

    let kpis = compute_kpis(&table);
    let correlation = pearson(&table.contacts(), &table.sales());
    let conversion_chart = conversion_scatter(&table);
    let efficiency_chart = spend_efficiency(&table);

    Ok(AnalysisReport {
        generated_at: Utc::now(),
        stats: outcome.stats,
        table,
        kpis,
        correlation,
        conversion_chart,
        efficiency_chart,
        warning,
    })
}
