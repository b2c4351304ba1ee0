//! KPI aggregation over a normalized table.

use funnel_core::{KpiSet, NormalizedTable};

/// Compute the KPI set for a table in a single pass.
///
/// Every ratio guards its denominator: a zero denominator yields exactly
/// 0.0. This is a display-safety rule for the metric tiles, not a
/// mathematical treatment of the undefined case.
pub fn compute_kpis(table: &NormalizedTable) -> KpiSet {
    let mut total_spend = 0.0;
    let mut total_contacts = 0u64;
    let mut total_sales = 0u64;

    for record in table {
        total_spend += record.traffic_spend;
        total_contacts += record.contact_count;
        total_sales += record.sale_count;
    }

    let cost_per_contact = if total_contacts > 0 {
        total_spend / total_contacts as f64
    } else {
        0.0
    };

    let conversion_rate_pct = if total_contacts > 0 {
        (total_sales as f64 / total_contacts as f64) * 100.0
    } else {
        0.0
    };

    let cost_per_sale = if total_sales > 0 {
        total_spend / total_sales as f64
    } else {
        0.0
    };

    KpiSet {
        total_spend,
        total_contacts,
        total_sales,
        cost_per_contact,
        conversion_rate_pct,
        cost_per_sale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use funnel_core::NormalizedRecord;

    fn record(spend: f64, contacts: u64, sales: u64) -> NormalizedRecord {
        NormalizedRecord {
            traffic_spend: spend,
            contact_count: contacts,
            sale_count: sales,
        }
    }

    #[test]
    fn test_single_row() {
        // spend=10.00, contacts=5, sales=2
        let table = NormalizedTable::from_records(vec![record(10.0, 5, 2)]);
        let kpis = compute_kpis(&table);

        assert_relative_eq!(kpis.total_spend, 10.0);
        assert_eq!(kpis.total_contacts, 5);
        assert_eq!(kpis.total_sales, 2);
        assert_relative_eq!(kpis.cost_per_contact, 2.0);
        assert_relative_eq!(kpis.conversion_rate_pct, 40.0);
        assert_relative_eq!(kpis.cost_per_sale, 5.0);
    }

    #[test]
    fn test_sums_over_multiple_rows() {
        let table = NormalizedTable::from_records(vec![
            record(100.0, 10, 2),
            record(50.0, 5, 1),
            record(150.0, 15, 3),
        ]);
        let kpis = compute_kpis(&table);

        assert_relative_eq!(kpis.total_spend, 300.0);
        assert_eq!(kpis.total_contacts, 30);
        assert_eq!(kpis.total_sales, 6);
        assert_relative_eq!(kpis.cost_per_contact, 10.0);
        assert_relative_eq!(kpis.conversion_rate_pct, 20.0);
        assert_relative_eq!(kpis.cost_per_sale, 50.0);
    }

    #[test]
    fn test_zero_contacts_guard() {
        let table = NormalizedTable::from_records(vec![record(100.0, 0, 0)]);
        let kpis = compute_kpis(&table);

        assert_eq!(kpis.cost_per_contact, 0.0);
        assert_eq!(kpis.conversion_rate_pct, 0.0);
        assert_eq!(kpis.cost_per_sale, 0.0);
        assert_relative_eq!(kpis.total_spend, 100.0);
    }

    #[test]
    fn test_zero_sales_guard() {
        let table = NormalizedTable::from_records(vec![record(100.0, 10, 0)]);
        let kpis = compute_kpis(&table);

        assert_relative_eq!(kpis.cost_per_contact, 10.0);
        assert_eq!(kpis.conversion_rate_pct, 0.0);
        assert_eq!(kpis.cost_per_sale, 0.0);
    }

    #[test]
    fn test_empty_table() {
        let kpis = compute_kpis(&NormalizedTable::new());

        assert_eq!(kpis.total_spend, 0.0);
        assert_eq!(kpis.total_contacts, 0);
        assert_eq!(kpis.total_sales, 0);
        assert_eq!(kpis.cost_per_contact, 0.0);
        assert_eq!(kpis.conversion_rate_pct, 0.0);
        assert_eq!(kpis.cost_per_sale, 0.0);
    }
}
