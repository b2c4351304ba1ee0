//! User-facing value formatting for the KPI tiles.

use funnel_core::{CurrencyFormat, KpiSet};

/// Format a monetary amount in the configured locale, e.g. `R$ 1.234,56`.
pub fn format_currency(value: f64, format: &CurrencyFormat) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!(
        "{} {}{}{}",
        format.prefix,
        group_digits(int_part, format.thousands_sep),
        format.decimal_sep,
        frac_part
    )
}

/// Format a percentage with two decimals, e.g. `40.00%`.
pub fn format_percent(value_pct: f64) -> String {
    format!("{value_pct:.2}%")
}

/// Format a count with locale digit grouping, e.g. `12.345`.
pub fn format_count(value: u64, format: &CurrencyFormat) -> String {
    group_digits(&value.to_string(), format.thousands_sep)
}

/// The six user-facing KPI tiles as label/value pairs, in display order.
pub fn kpi_rows(kpis: &KpiSet, format: &CurrencyFormat) -> Vec<(String, String)> {
    vec![
        (
            "Total spend".to_string(),
            format_currency(kpis.total_spend, format),
        ),
        (
            "Total contacts".to_string(),
            format_count(kpis.total_contacts, format),
        ),
        (
            "Total sales".to_string(),
            format_count(kpis.total_sales, format),
        ),
        (
            "Cost per contact".to_string(),
            format_currency(kpis.cost_per_contact, format),
        ),
        (
            "Conversion rate".to_string(),
            format_percent(kpis.conversion_rate_pct),
        ),
        (
            "Cost per sale".to_string(),
            format_currency(kpis.cost_per_sale, format),
        ),
    ]
}

/// Insert the grouping separator every three digits, right to left.
fn group_digits(digits: &str, sep: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}
