//! Configuration structures for the funnel-analytics system.

use serde::{Deserialize, Serialize};

/// Main ingestion configuration.
///
/// Always passed explicitly to the ingestion entry point; there is no
/// ambient or global switch selecting the input source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Field delimiter of the raw input.
    pub delimiter: u8,
    /// Fixed column layout of the expected export.
    pub layout: ColumnLayout,
    /// Currency formatting of the spend column.
    pub currency: CurrencyFormat,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            layout: ColumnLayout::default(),
            currency: CurrencyFormat::default(),
        }
    }
}

/// Fixed-position column layout of the sales export.
///
/// The export carries no header row; the three target columns are addressed
/// by zero-based position. User-facing documentation refers to columns 3, 22
/// and 24 (1-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Zero-based index of the traffic spend column.
    pub spend: usize,
    /// Zero-based index of the contact count column.
    pub contact: usize,
    /// Zero-based index of the sale count column.
    pub sale: usize,
    /// Minimum field count a row must have; anything shorter is a fatal
    /// schema mismatch, not a row-level defect.
    pub min_columns: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            spend: 2,
            contact: 21,
            sale: 23,
            min_columns: 24,
        }
    }
}

/// Locale formatting of the currency-valued spend column.
///
/// Defaults describe Brazilian real formatting, e.g. `R$ 1.234,56`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Currency marker stripped from the front of the field.
    pub prefix: String,
    /// Digit grouping separator.
    pub thousands_sep: char,
    /// Decimal separator.
    pub decimal_sep: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            prefix: "R$".to_string(),
            thousands_sep: '.',
            decimal_sep: ',',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IngestConfig::default();
        assert_eq!(config.delimiter, b',');
        assert_eq!(config.layout.spend, 2);
        assert_eq!(config.layout.contact, 21);
        assert_eq!(config.layout.sale, 23);
        assert_eq!(config.layout.min_columns, 24);
    }

    #[test]
    fn test_default_currency_format() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.prefix, "R$");
        assert_eq!(fmt.thousands_sep, '.');
        assert_eq!(fmt.decimal_sep, ',');
    }
}
