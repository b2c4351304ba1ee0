//! Field cleaning and numeric coercion.
//!
//! The spend column arrives in locale currency formatting (`R$ 1.234,56`);
//! count columns arrive as plain numerics. Cleaning never raises: a field
//! that cannot be coerced yields `None`, and the caller decides what row
//! exclusion means.

use funnel_core::CurrencyFormat;

/// Clean a currency-formatted field and parse it as a decimal amount.
///
/// Strips the currency prefix and surrounding whitespace. When the locale
/// decimal separator is present, grouping separators are removed and the
/// decimal separator is replaced with `.` before parsing; a value without
/// the locale decimal separator is parsed as a standard decimal, so an
/// already-normalized field like `10.00` survives unchanged.
///
/// Returns `None` for unparsable, non-finite or negative amounts.
pub fn clean_currency(raw: &str, format: &CurrencyFormat) -> Option<f64> {
    let s = raw.trim();
    let s = s.strip_prefix(format.prefix.as_str()).unwrap_or(s).trim();

    if s.is_empty() {
        return None;
    }

    let normalized: String = if s.contains(format.decimal_sep) {
        s.chars()
            .filter(|&c| c != format.thousands_sep)
            .map(|c| if c == format.decimal_sep { '.' } else { c })
            .collect()
    } else {
        s.to_string()
    };

    let value = normalized.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Parse a count field as a non-negative integer.
///
/// Accepts integral-valued decimals (`"5"`, `"5.0"`); fractional parts are
/// truncated during coercion. Returns `None` for unparsable, non-finite or
/// negative values.
pub fn parse_count(raw: &str) -> Option<u64> {
    let value = raw.trim().parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value.trunc() as u64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn brl() -> CurrencyFormat {
        CurrencyFormat::default()
    }

    #[test]
    fn test_full_currency_string() {
        let v = clean_currency("R$ 1.234,56", &brl()).unwrap();
        assert_relative_eq!(v, 1234.56);
    }

    #[test]
    fn test_currency_without_prefix() {
        let v = clean_currency("1.234,56", &brl()).unwrap();
        assert_relative_eq!(v, 1234.56);
    }

    #[test]
    fn test_plain_decimal_survives() {
        // No locale decimal separator: the dot is a decimal point here,
        // not digit grouping.
        let v = clean_currency("10.00", &brl()).unwrap();
        assert_relative_eq!(v, 10.0);
    }

    #[test]
    fn test_grouped_millions() {
        let v = clean_currency("R$ 1.234.567,89", &brl()).unwrap();
        assert_relative_eq!(v, 1_234_567.89);
    }

    #[test]
    fn test_comma_only_decimal() {
        let v = clean_currency("12,5", &brl()).unwrap();
        assert_relative_eq!(v, 12.5);
    }

    #[test]
    fn test_unparsable_currency() {
        assert_eq!(clean_currency("n/a", &brl()), None);
        assert_eq!(clean_currency("", &brl()), None);
        assert_eq!(clean_currency("R$ ", &brl()), None);
        assert_eq!(clean_currency("R$ abc", &brl()), None);
    }

    #[test]
    fn test_negative_spend_rejected() {
        assert_eq!(clean_currency("-10,50", &brl()), None);
    }

    #[test]
    fn test_parse_count_plain() {
        assert_eq!(parse_count("5"), Some(5));
        assert_eq!(parse_count(" 12 "), Some(12));
        assert_eq!(parse_count("0"), Some(0));
    }

    #[test]
    fn test_parse_count_integral_float() {
        assert_eq!(parse_count("5.0"), Some(5));
        assert_eq!(parse_count("7.9"), Some(7)); // truncated
    }

    #[test]
    fn test_parse_count_invalid() {
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count("-3"), None);
        assert_eq!(parse_count("NaN"), None);
        assert_eq!(parse_count("inf"), None);
    }
}
