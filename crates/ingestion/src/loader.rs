//! Table loading: delimited input to a normalized table.
//!
//! Two failure tiers, deliberately asymmetric:
//! - A row shorter than the expected layout is a fatal schema mismatch and
//!   aborts the whole load (a wrong export shape is never partially usable).
//! - A row whose target fields fail numeric cleaning is dropped silently
//!   and counted; bad values are routine in these exports.

use std::io::Read;

use csv::StringRecord;
use funnel_core::{Error, IngestConfig, IngestStats, NormalizedRecord, NormalizedTable, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::clean::{clean_currency, parse_count};

/// Result of one ingestion pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadOutcome {
    /// The normalized table, in input order.
    pub table: NormalizedTable,
    /// Counters describing what was read, kept and dropped.
    pub stats: IngestStats,
}

/// Load a normalized table from raw delimited input.
///
/// The input source is an explicit parameter; the loader performs no I/O of
/// its own beyond draining the reader. Empty input yields an empty table,
/// not an error. The caller is responsible for treating an empty result as
/// a user-visible data quality condition.
pub fn load_table(reader: impl Read, config: &IngestConfig) -> Result<LoadOutcome> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(config.delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut table = NormalizedTable::new();
    let mut stats = IngestStats::default();

    for (idx, result) in csv_reader.records().enumerate() {
        // Headerless input: record 0 is row 1.
        let line = idx + 1;
        let record = result?;
        stats.rows_read += 1;

        if record.len() < config.layout.min_columns {
            return Err(Error::schema(line, config.layout.min_columns, record.len()));
        }

        match normalize_row(&record, config, &mut stats) {
            Some(normalized) => {
                stats.rows_kept += 1;
                table.push(normalized);
            }
            None => {
                stats.rows_dropped += 1;
                debug!(line, "dropped row with unparsable target field");
            }
        }
    }

    info!(
        rows_read = stats.rows_read,
        rows_kept = stats.rows_kept,
        rows_dropped = stats.rows_dropped,
        "normalized sales table loaded"
    );

    Ok(LoadOutcome { table, stats })
}

/// Clean the three target fields of one row.
///
/// Returns `None` when any field fails cleaning; the row is excluded whole
/// so the table never carries a partial record. Field-level defect counters
/// are updated for every bad field, not just the first.
fn normalize_row(
    record: &StringRecord,
    config: &IngestConfig,
    stats: &mut IngestStats,
) -> Option<NormalizedRecord> {
    let layout = &config.layout;

    // Indices are in bounds: the schema check already required min_columns.
    let spend = clean_currency(&record[layout.spend], &config.currency);
    let contacts = parse_count(&record[layout.contact]);
    let sales = parse_count(&record[layout.sale]);

    if spend.is_none() {
        stats.bad_spend += 1;
    }
    if contacts.is_none() {
        stats.bad_contacts += 1;
    }
    if sales.is_none() {
        stats.bad_sales += 1;
    }

    Some(NormalizedRecord {
        traffic_spend: spend?,
        contact_count: contacts?,
        sale_count: sales?,
    })
}
