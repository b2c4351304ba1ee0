//! Chart specifications handed to the presentation layer.
//!
//! These are data-only descriptions of the two analysis charts; the actual
//! rendering happens outside this workspace. Everything here is plain
//! serializable structs so the renderer can live across any boundary.

use std::collections::BTreeMap;

use funnel_core::{Count, NormalizedTable};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::correlation::pearson;
use crate::trend::TrendLine;

/// One point of a scatter chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// Scatter of contacts (x) vs sales (y) with a linear trend overlay and a
/// Pearson r annotation.
///
/// `trend` and `pearson_r` are absent when undefined (fewer than two rows or
/// a constant column); the renderer shows the points without an overlay in
/// that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
    pub trend: Option<TrendLine>,
    pub pearson_r: Option<f64>,
}

/// One bubble of the spend-efficiency chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bubble {
    /// Distinct spend value (x axis).
    pub spend: f64,
    /// Sales summed over rows with this spend (y axis).
    pub total_sales: Count,
    /// Contacts summed over rows with this spend (bubble size).
    pub total_contacts: Count,
}

/// Bubble scatter of aggregated spend vs summed sales, bubble size = summed
/// contacts, one bubble per distinct spend value in ascending spend order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub size_label: String,
    pub bubbles: Vec<Bubble>,
}

/// Build the contacts-vs-sales correlation chart.
pub fn conversion_scatter(table: &NormalizedTable) -> ScatterChartSpec {
    let contacts = table.contacts();
    let sales = table.sales();

    let points = contacts
        .iter()
        .zip(&sales)
        .map(|(&x, &y)| ScatterPoint { x, y })
        .collect();

    ScatterChartSpec {
        title: "Contacts vs. sales".to_string(),
        x_label: "Total contacts (leads)".to_string(),
        y_label: "Number of sales".to_string(),
        points,
        trend: TrendLine::fit(&contacts, &sales),
        pearson_r: pearson(&contacts, &sales),
    }
}

/// Build the spend-efficiency bubble chart.
///
/// Rows are grouped by distinct spend value so a large export still renders
/// as a readable set of bubbles.
pub fn spend_efficiency(table: &NormalizedTable) -> BubbleChartSpec {
    let mut groups: BTreeMap<OrderedFloat<f64>, (Count, Count)> = BTreeMap::new();

    for record in table {
        let entry = groups
            .entry(OrderedFloat(record.traffic_spend))
            .or_insert((0, 0));
        entry.0 += record.sale_count;
        entry.1 += record.contact_count;
    }

    let bubbles = groups
        .into_iter()
        .map(|(spend, (total_sales, total_contacts))| Bubble {
            spend: spend.into_inner(),
            total_sales,
            total_contacts,
        })
        .collect();

    BubbleChartSpec {
        title: "Traffic spend vs. sales".to_string(),
        x_label: "Traffic spend".to_string(),
        y_label: "Total sales".to_string(),
        size_label: "Total contacts".to_string(),
        bubbles,
    }
}
