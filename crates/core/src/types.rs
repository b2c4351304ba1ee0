//! Core data types for the funnel-analytics system.

use serde::{Deserialize, Serialize};

/// Monetary amount in the report currency.
pub type Money = f64;

/// Event count (contacts, sales).
pub type Count = u64;

/// One cleaned row of the sales dataset.
///
/// Every field is finite and non-negative; rows that fail cleaning are
/// excluded whole during ingestion, so a record never carries a partial or
/// placeholder value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Traffic spend for the row, currency-cleaned.
    pub traffic_spend: Money,
    /// Number of recorded contacts (attendance events).
    pub contact_count: Count,
    /// Number of closed sales.
    pub sale_count: Count,
}

/// Ordered collection of normalized records.
///
/// Row order matches input order among surviving rows. Duplicates are
/// allowed; there is no row identity beyond position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTable {
    records: Vec<NormalizedRecord>,
}

impl NormalizedTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-normalized set of records.
    pub fn from_records(records: Vec<NormalizedRecord>) -> Self {
        Self { records }
    }

    /// Append a record, preserving insertion order.
    pub fn push(&mut self, record: NormalizedRecord) {
        self.records.push(record);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow the records in input order.
    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    /// Iterate over records in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedRecord> {
        self.records.iter()
    }

    /// Traffic spend column as a numeric series.
    pub fn spends(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.traffic_spend).collect()
    }

    /// Contact count column as a numeric series.
    pub fn contacts(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.contact_count as f64).collect()
    }

    /// Sale count column as a numeric series.
    pub fn sales(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.sale_count as f64).collect()
    }
}

impl<'a> IntoIterator for &'a NormalizedTable {
    type Item = &'a NormalizedRecord;
    type IntoIter = std::slice::Iter<'a, NormalizedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Aggregate performance metrics derived from one table.
///
/// Computed fresh on every analysis run; never cached across tables. The
/// three ratios apply a display-safety rule: a zero denominator yields
/// exactly 0.0 rather than NaN or infinity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSet {
    /// Sum of traffic spend over all records.
    pub total_spend: Money,
    /// Sum of contact counts.
    pub total_contacts: Count,
    /// Sum of sale counts.
    pub total_sales: Count,
    /// total_spend / total_contacts (0 when no contacts).
    pub cost_per_contact: f64,
    /// total_sales / total_contacts * 100 (0 when no contacts).
    pub conversion_rate_pct: f64,
    /// total_spend / total_sales (0 when no sales).
    pub cost_per_sale: f64,
}

/// Counters describing one ingestion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestStats {
    /// Total rows read from the input.
    pub rows_read: u64,
    /// Rows that survived cleaning.
    pub rows_kept: u64,
    /// Rows dropped because a target field failed cleaning.
    pub rows_dropped: u64,
    /// Rows whose spend field was unparsable.
    pub bad_spend: u64,
    /// Rows whose contact field was unparsable.
    pub bad_contacts: u64,
    /// Rows whose sale field was unparsable.
    pub bad_sales: u64,
}

impl IngestStats {
    /// Fraction of rows dropped during cleaning.
    pub fn drop_frac(&self) -> f64 {
        if self.rows_read > 0 {
            self.rows_dropped as f64 / self.rows_read as f64
        } else {
            0.0
        }
    }

    /// Reset all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Non-fatal, user-visible data quality condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataWarning {
    /// Every row was dropped during cleaning; the table is empty. Distinct
    /// from "no input provided", which the presentation layer handles.
    EmptyAfterCleaning,
}
